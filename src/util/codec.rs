/// Base64 utilities (standard alphabet, padded)
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose},
};

use crate::error::EncodingResult;

/// Standard alphabet decoder that accepts input with or without `=` padding
const PADDING_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn base64_encode(text: &str) -> String {
    general_purpose::STANDARD.encode(text.as_bytes())
}

/// Decode standard base64 into text. Padding is optional. Decoded bytes that are not UTF-8 are
/// replaced with U+FFFD rather than rejected.
pub fn base64_decode(encoded: &str) -> EncodingResult<String> {
    let bytes = PADDING_INDIFFERENT.decode(encoded)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
