//! # Overlay Framebuffer
//!
//! Double-buffered packed pixel memory for the OSD.
//!
//! ## Modules
//!
//! - `color`: `Level`, the 2-bit color domain
//! - `access`: pixel addressing and packing, bounds-checked get/set
//! - `store`: `PixelStore`, the buffer pair and active index
//!
//! ## Layout
//!
//! Rows are stored top to bottom, `STRIDE` bytes each. Every byte holds
//! four pixels, leftmost in the most significant bits:
//!
//! ```text
//!  bit  7 6   5 4   3 2   1 0
//!      ┌─────┬─────┬─────┬─────┐
//!      │ x+0 │ x+1 │ x+2 │ x+3 │
//!      └─────┴─────┴─────┴─────┘
//! ```
//!
//! The renderer writes only the active buffer. The other one belongs to
//! the video generator until the next `swap()`.

pub mod access;
pub mod color;
pub mod store;

use crate::error::OverlayError;
use color::Level;
use embedded_graphics_core::{geometry::Point, Pixel};

pub const WIDTH: usize = 360;
pub const HEIGHT: usize = 288;
pub const BITS_PER_PIXEL: usize = 2;
pub const PIXELS_PER_BYTE: usize = 8 / BITS_PER_PIXEL;
pub const STRIDE: usize = (WIDTH * BITS_PER_PIXEL + 7) / 8;
pub const FRAME_BYTES: usize = STRIDE * HEIGHT;
pub const BUFFER_COUNT: usize = 2;

/// Read-only view of one packed frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    bytes: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Wrap raw frame memory handed over from outside the renderer.
    pub fn new(bytes: &'a [u8]) -> Result<Self, OverlayError> {
        if bytes.len() != FRAME_BYTES {
            return Err(OverlayError::FrameSize {
                expected: FRAME_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    pub(crate) fn from_frame(frame: &'a [u8; FRAME_BYTES]) -> Self {
        Self { bytes: frame }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= HEIGHT {
            return None;
        }
        Some(&self.bytes[y * STRIDE..(y + 1) * STRIDE])
    }

    pub fn level(&self, x: i32, y: i32) -> Option<Level> {
        let (x, y) = access::in_bounds(x, y)?;
        Some(access::read_level(self.bytes, x, y))
    }

    /// Every pixel in scan order, left to right then top to bottom.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<Level>> + 'a {
        let bytes = self.bytes;
        (0..HEIGHT).flat_map(move |y| {
            (0..WIDTH).map(move |x| {
                Pixel(
                    Point::new(x as i32, y as i32),
                    access::read_level(bytes, x, y),
                )
            })
        })
    }

    pub fn count_level(&self, level: Level) -> usize {
        self.pixels().filter(|Pixel(_, l)| *l == level).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_rounds_up() {
        assert_eq!(STRIDE, 90);
        assert_eq!(FRAME_BYTES, 90 * 288);
        assert_eq!(PIXELS_PER_BYTE, 4);
    }

    #[test]
    fn test_frame_view_checks_length() {
        let short = [0u8; 10];
        assert_eq!(
            FrameView::new(&short).unwrap_err(),
            OverlayError::FrameSize { expected: FRAME_BYTES, actual: 10 }
        );
    }

    #[test]
    fn test_frame_view_decodes_msb_first() {
        let mut raw = [0u8; FRAME_BYTES];
        raw[0] = 0b11_10_01_00;
        raw[STRIDE + 1] = 0b00_00_00_10;
        let view = FrameView::new(&raw).unwrap();

        assert_eq!(view.level(0, 0), Some(Level::White));
        assert_eq!(view.level(1, 0), Some(Level::Gray));
        assert_eq!(view.level(2, 0), Some(Level::Black));
        assert_eq!(view.level(3, 0), Some(Level::Transparent));
        assert_eq!(view.level(7, 1), Some(Level::Gray));
        assert_eq!(view.level(-1, 0), None);
        assert_eq!(view.level(0, HEIGHT as i32), None);
        assert_eq!(view.count_level(Level::Gray), 2);
        assert_eq!(view.row(1).map(|r| r[1]), Some(0b10));
    }
}
