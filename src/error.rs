//! Errors for data crossing into the renderer from outside.
//!
//! Drawing itself never fails: off-buffer pixels are dropped.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayError {
    /// A raw value outside the 2-bit level domain.
    InvalidLevel(u8),
    /// A raw frame whose length does not match the packed layout.
    FrameSize { expected: usize, actual: usize },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::InvalidLevel(raw) => write!(f, "invalid color level {}", raw),
            OverlayError::FrameSize { expected, actual } => {
                write!(f, "frame is {} bytes, expected {}", actual, expected)
            }
        }
    }
}
