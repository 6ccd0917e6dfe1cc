use std::fmt::{self, Display, Write as _};

/// Append-only text sink written by generated template code during a
/// render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    inner: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: String::with_capacity(capacity),
        }
    }

    /// Append literal template text
    pub fn write(&mut self, text: &str) {
        self.inner.push_str(text);
    }

    /// Append the `Display` form of an interpolated value
    pub fn write_value(&mut self, value: impl Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.inner, "{value}");
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Hand out the rendered text and leave the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.inner)
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.push_str(s);
        Ok(())
    }
}

impl Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
