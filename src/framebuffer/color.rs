//! 2-bit overlay color levels
use crate::error::OverlayError;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_core::pixelcolor::{
    raw::{RawData, RawU2},
    PixelColor,
};

/// One of the four levels a packed pixel can hold.
///
/// `Transparent` is a real level: the video generator lets the camera
/// image through wherever it reads it. Zeroed memory is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Level {
    #[default]
    Transparent = 0,
    Black = 1,
    Gray = 2,
    White = 3,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Transparent, Level::Black, Level::Gray, Level::White];

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the low two bits of `raw`; higher bits are ignored.
    pub const fn from_bits(raw: u8) -> Level {
        match raw & 0b11 {
            0 => Level::Transparent,
            1 => Level::Black,
            2 => Level::Gray,
            _ => Level::White,
        }
    }

    /// A storage byte with all four sub-fields set to this level.
    pub const fn fill_byte(self) -> u8 {
        let b = self.bits();
        (b << 6) | (b << 4) | (b << 2) | b
    }

    pub fn is_opaque(self) -> bool {
        self != Level::Transparent
    }

    /// Preview color for this level drawn over `backdrop`.
    pub fn to_rgb888(self, backdrop: Rgb888) -> Rgb888 {
        match self {
            Level::Transparent => backdrop,
            Level::Black => Rgb888::new(0, 0, 0),
            Level::Gray => Rgb888::new(128, 128, 128),
            Level::White => Rgb888::new(255, 255, 255),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = OverlayError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > 0b11 {
            return Err(OverlayError::InvalidLevel(raw));
        }
        Ok(Level::from_bits(raw))
    }
}

impl PixelColor for Level {
    type Raw = RawU2;
}

impl From<RawU2> for Level {
    fn from(raw: RawU2) -> Self {
        Level::from_bits(raw.into_inner())
    }
}

impl From<Level> for RawU2 {
    fn from(level: Level) -> Self {
        RawU2::new(level.bits())
    }
}
