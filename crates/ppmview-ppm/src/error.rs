use std::fmt;

/// A decode error for a PPM byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmError {
    pub message: String,
    /// Byte offset into the input where the error was detected.
    pub offset: usize,
}

impl PpmError {
    pub(crate) fn new(msg: impl Into<String>, offset: usize) -> Self {
        Self { message: msg.into(), offset }
    }
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ppm decode error at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for PpmError {}
