//! Pixel addressing and 2-bit packing.
//!
//! Every read or write of a packed pixel goes through [`locate`], so the
//! byte layout is defined in exactly one place.

use super::{
    color::Level, store::PixelStore, BITS_PER_PIXEL, HEIGHT, PIXELS_PER_BYTE, STRIDE, WIDTH,
};

const LEVEL_MASK: u8 = 0b11;

/// Byte index and left shift of pixel `(x, y)`. Pixel 0 of a byte sits in
/// the top two bits.
#[inline]
pub const fn locate(x: usize, y: usize) -> (usize, u32) {
    let index = y * STRIDE + x / PIXELS_PER_BYTE;
    let shift = (PIXELS_PER_BYTE - 1 - x % PIXELS_PER_BYTE) * BITS_PER_PIXEL;
    (index, shift as u32)
}

/// Signed coordinates to buffer indices, `None` when off-buffer.
#[inline]
pub fn in_bounds(x: i32, y: i32) -> Option<(usize, usize)> {
    if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
        return None;
    }
    Some((x as usize, y as usize))
}

/// Caller guarantees `(x, y)` is on-buffer.
#[inline]
pub fn read_level(frame: &[u8], x: usize, y: usize) -> Level {
    let (index, shift) = locate(x, y);
    Level::from_bits(frame[index] >> shift)
}

/// Caller guarantees `(x, y)` is on-buffer.
#[inline]
pub fn write_level(frame: &mut [u8], x: usize, y: usize, level: Level) {
    let (index, shift) = locate(x, y);
    let byte = &mut frame[index];
    *byte &= !(LEVEL_MASK << shift);
    *byte |= level.bits() << shift;
}

impl PixelStore {
    /// Write one pixel of the active buffer. Off-buffer coordinates are
    /// dropped without touching memory.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, level: Level) {
        if let Some((x, y)) = in_bounds(x, y) {
            write_level(self.active_bytes_mut(), x, y, level);
        }
    }

    /// Read one pixel of the active buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Level> {
        self.active_frame().level(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FRAME_BYTES;
    use std::boxed::Box;

    fn snapshot(store: &PixelStore) -> Box<[u8]> {
        store.active_frame().as_bytes().into()
    }

    #[test]
    fn test_locate_packs_four_per_byte() {
        assert_eq!(locate(0, 0), (0, 6));
        assert_eq!(locate(1, 0), (0, 4));
        assert_eq!(locate(3, 0), (0, 0));
        assert_eq!(locate(4, 0), (1, 6));
        assert_eq!(locate(359, 287), (FRAME_BYTES - 1, 0));
    }

    #[test]
    fn test_set_get_round_trip_touches_one_byte() {
        let mut store = Box::new(PixelStore::new());
        store.clear(Level::Gray);

        let coords = [(0, 0), (1, 0), (2, 5), (3, 7), (180, 144), (359, 0), (0, 287), (359, 287)];
        for &(x, y) in coords.iter() {
            for level in Level::ALL {
                let before = snapshot(&store);
                store.set_pixel(x, y, level);
                let after = snapshot(&store);

                assert_eq!(store.get_pixel(x, y), Some(level));
                let (index, _) = locate(x as usize, y as usize);
                for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
                    if i != index {
                        assert_eq!(b, a, "byte {} changed writing ({}, {})", i, x, y);
                    }
                }
            }
            store.set_pixel(x, y, Level::Gray);
        }
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut store = Box::new(PixelStore::new());
        store.clear(Level::Black);
        let before = snapshot(&store);

        let outside = [
            (WIDTH as i32, 0),
            (0, HEIGHT as i32),
            (-1, 0),
            (0, -1),
            (i32::MAX, i32::MAX),
            (i32::MIN, 10),
            (400, 300),
        ];
        for &(x, y) in outside.iter() {
            store.set_pixel(x, y, Level::White);
            assert_eq!(store.get_pixel(x, y), None);
        }
        assert_eq!(before, snapshot(&store));
    }

    #[test]
    fn test_packing_matches_literal_bytes() {
        let mut store = Box::new(PixelStore::new());
        store.set_pixel(0, 0, Level::White);
        assert_eq!(store.active_frame().as_bytes()[0], 0b1100_0000);
        store.set_pixel(1, 0, Level::Gray);
        assert_eq!(store.active_frame().as_bytes()[0], 0b1110_0000);
        store.set_pixel(3, 0, Level::Black);
        assert_eq!(store.active_frame().as_bytes()[0], 0b1110_0001);
        store.set_pixel(0, 0, Level::Transparent);
        assert_eq!(store.active_frame().as_bytes()[0], 0b0010_0001);

        store.set_pixel(4, 1, Level::White);
        assert_eq!(store.active_frame().as_bytes()[STRIDE + 1], 0b1100_0000);
        store.set_pixel(358, 2, Level::Black);
        assert_eq!(store.active_frame().as_bytes()[2 * STRIDE + 89], 0b0000_0100);
    }
}
