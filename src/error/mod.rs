/// Centralized error handling for blade-helpers
pub mod encoding;

pub use encoding::{EncodingError, EncodingResult};
