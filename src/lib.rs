//! Encode/decode helpers and output buffer for generated template code.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod template;
pub mod util;

pub use config::{HelperConfig, HexCase, SpaceEncoding};
pub use error::{EncodingError, EncodingResult};
pub use template::{OutputBuffer, TemplateBase, TemplateHelpers};
