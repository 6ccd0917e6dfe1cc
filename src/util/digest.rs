/// Message digest utilities
use crate::config::HexCase;

/// MD5 of the UTF-8 bytes of `text`, rendered as 32 hex digits
pub fn md5_hex(text: &str, case: HexCase) -> String {
    let digest = md5::compute(text.as_bytes());
    match case {
        HexCase::Upper => format!("{digest:X}"),
        HexCase::Lower => format!("{digest:x}"),
    }
}
