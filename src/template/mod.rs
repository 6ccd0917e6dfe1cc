/// Runtime support for generated templates
pub mod base;
pub mod buffer;
pub mod helpers;

pub use base::TemplateBase;
pub use buffer::OutputBuffer;
pub use helpers::TemplateHelpers;
