/// Encode/decode helpers callable from generated template code
use tracing::{debug, warn};

use crate::config::HelperConfig;
use crate::error::EncodingResult;
use crate::util::{self, HtmlEscape};

/// Turn a swallowed failure into an empty string, logging it.
fn or_empty(operation: &str, result: EncodingResult<String>) -> String {
    result.unwrap_or_else(|e| {
        warn!("{} failed, returning empty string: {}", operation, e);
        String::new()
    })
}

/// Helper methods for template types.
///
/// Every method takes `&str` or `Option<&str>`; `None` yields an empty
/// string. All methods are total except [`base64_decode`], which
/// reports malformed input as `EncodingError::Base64`. Charset failures
/// (percent-decoded bytes that are not UTF-8) are logged and yield `""`.
///
/// [`base64_decode`]: TemplateHelpers::base64_decode
pub trait TemplateHelpers {
    fn config(&self) -> &HelperConfig;

    /// Escape `& < > " '`
    fn html_encode<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        let value: Option<&str> = value.into();
        value.map(HtmlEscape::escape).unwrap_or_default()
    }

    fn html_decode<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        let value: Option<&str> = value.into();
        value.map(HtmlEscape::unescape).unwrap_or_default()
    }

    /// Encode the query of a URL. The part up to and including the first
    /// `?` is kept as written; each key and each present value after it is
    /// percent-encoded.
    fn url_encode<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        let value: Option<&str> = value.into();
        match value {
            Some(url) if !url.is_empty() => {
                debug!("Encoding query of {}", url);
                util::encode_query(url, self.config().space_encoding)
            }
            _ => String::new(),
        }
    }

    /// Encode the whole input as one opaque component
    fn full_url_encode<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        let value: Option<&str> = value.into();
        value
            .map(|v| util::encode_component(v, self.config().space_encoding))
            .unwrap_or_default()
    }

    fn url_decode<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        let value: Option<&str> = value.into();
        let Some(value) = value else {
            return String::new();
        };
        or_empty(
            "URL decode",
            util::decode_component(value, self.config().decode_plus_as_space),
        )
    }

    fn full_url_decode<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        self.url_decode(value)
    }

    /// MD5 hex digest, uppercase unless configured otherwise
    fn md5<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        let value: Option<&str> = value.into();
        value
            .map(|v| util::md5_hex(v, self.config().hex_case))
            .unwrap_or_default()
    }

    fn base64_encode<'a>(&self, value: impl Into<Option<&'a str>>) -> String {
        let value: Option<&str> = value.into();
        value.map(util::base64_encode).unwrap_or_default()
    }

    /// # Errors
    /// Returns `EncodingError::Base64` when the input is not valid
    /// standard base64.
    fn base64_decode<'a>(&self, value: impl Into<Option<&'a str>>) -> EncodingResult<String> {
        let value: Option<&str> = value.into();
        match value {
            Some(encoded) => util::base64_decode(encoded).inspect_err(|e| {
                debug!("Rejected base64 input: {}", e);
            }),
            None => Ok(String::new()),
        }
    }
}
