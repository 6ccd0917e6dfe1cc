use std::fmt::Display;

use tracing::debug;

use crate::config::HelperConfig;
use crate::template::buffer::OutputBuffer;
use crate::template::helpers::TemplateHelpers;

/// State shared by every generated template: its output buffer and the
/// helper configuration.
#[derive(Clone, Debug, Default)]
pub struct TemplateBase {
    buffer: OutputBuffer,
    config: HelperConfig,
}

impl TemplateBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HelperConfig) -> Self {
        Self {
            buffer: OutputBuffer::new(),
            config,
        }
    }

    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut OutputBuffer {
        &mut self.buffer
    }

    pub fn write(&mut self, text: &str) {
        self.buffer.write(text);
    }

    pub fn write_value(&mut self, value: impl Display) {
        self.buffer.write_value(value);
    }

    /// Run one render pass. Returns everything `body` wrote and leaves the
    /// buffer empty for the next pass.
    pub fn render<F>(&mut self, body: F) -> String
    where
        F: FnOnce(&mut Self),
    {
        body(self);
        let output = self.buffer.take();
        debug!("Rendered {} bytes", output.len());
        output
    }
}

impl TemplateHelpers for TemplateBase {
    fn config(&self) -> &HelperConfig {
        &self.config
    }
}
