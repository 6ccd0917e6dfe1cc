/// Encoding helper error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Charset error: {0}")]
    Charset(String),
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EncodingError {
    /// Create a new Charset error
    pub fn charset(msg: impl Into<String>) -> Self {
        Self::Charset(msg.into())
    }

    /// Create a new Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Failures that the template helpers turn into an empty string
    /// instead of reporting.
    pub fn is_swallowed(&self) -> bool {
        matches!(self, Self::Charset(_))
    }
}

impl From<std::string::FromUtf8Error> for EncodingError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Charset(err.to_string())
    }
}

/// Result type alias for encoding operations
pub type EncodingResult<T> = Result<T, EncodingError>;
