//! Double-buffered pixel storage.
use core::sync::atomic::{AtomicU8, Ordering};

use super::{color::Level, FrameView, BUFFER_COUNT, FRAME_BYTES};

/// Two packed frames and the index of the one being drawn.
///
/// Only the active frame is ever written. The other frame is left alone
/// for the video generator to scan out, and ownership changes hands on
/// `swap()` alone.
pub struct PixelStore {
    frames: [[u8; FRAME_BYTES]; BUFFER_COUNT],
    active: AtomicU8,
}

impl PixelStore {
    pub const fn new() -> Self {
        Self {
            frames: [[0; FRAME_BYTES]; BUFFER_COUNT],
            active: AtomicU8::new(0),
        }
    }

    /// Zero both frames and make frame 0 the write target.
    pub fn init(&mut self) {
        for frame in self.frames.iter_mut() {
            frame.fill(0);
        }
        self.active.store(0, Ordering::Release);
    }

    /// Fill the active frame with `level`, one byte store per four pixels.
    pub fn clear(&mut self, level: Level) {
        self.active_bytes_mut().fill(level.fill_byte());
    }

    /// Hand the active frame to scan-out and start drawing into the other.
    pub fn swap(&mut self) {
        self.active.fetch_xor(1, Ordering::AcqRel);
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire) as usize
    }

    pub fn active_frame(&self) -> FrameView<'_> {
        FrameView::from_frame(&self.frames[self.active()])
    }

    /// The frame the video generator should be reading.
    pub fn scanout(&self) -> FrameView<'_> {
        FrameView::from_frame(&self.frames[self.active() ^ 1])
    }

    pub fn buffer(&self, index: usize) -> Option<&[u8]> {
        self.frames.get(index).map(|f| &f[..])
    }

    pub(crate) fn active_bytes_mut(&mut self) -> &mut [u8; FRAME_BYTES] {
        let index = self.active();
        &mut self.frames[index]
    }
}

impl Default for PixelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{HEIGHT, WIDTH};
    use std::boxed::Box;

    #[test]
    fn test_init_zeroes_both_frames() {
        let mut store = Box::new(PixelStore::new());
        store.clear(Level::White);
        store.swap();
        store.clear(Level::Gray);

        store.init();
        assert_eq!(store.active(), 0);
        assert!(store.buffer(0).unwrap().iter().all(|&b| b == 0));
        assert!(store.buffer(1).unwrap().iter().all(|&b| b == 0));
        assert!(store.buffer(2).is_none());
    }

    #[test]
    fn test_clear_sets_every_pixel() {
        let mut store = Box::new(PixelStore::new());
        for level in Level::ALL {
            store.clear(level);
            for y in 0..HEIGHT as i32 {
                for x in 0..WIDTH as i32 {
                    assert_eq!(store.get_pixel(x, y), Some(level));
                }
            }
        }
    }

    #[test]
    fn test_clear_leaves_scanout_alone() {
        let mut store = Box::new(PixelStore::new());
        store.clear(Level::Black);
        store.swap();
        store.clear(Level::White);
        store.set_pixel(5, 5, Level::Gray);

        assert!(store.scanout().as_bytes().iter().all(|&b| b == 0x55));
        assert_eq!(store.scanout().level(5, 5), Some(Level::Black));
    }

    #[test]
    fn test_swap_toggles_active() {
        let mut store = Box::new(PixelStore::new());
        assert_eq!(store.active(), 0);
        store.swap();
        assert_eq!(store.active(), 1);
        store.swap();
        assert_eq!(store.active(), 0);
    }

    #[test]
    fn test_scanout_is_the_other_frame() {
        let mut store = Box::new(PixelStore::new());
        store.set_pixel(10, 20, Level::White);
        assert_eq!(store.scanout().level(10, 20), Some(Level::Transparent));
        store.swap();
        assert_eq!(store.scanout().level(10, 20), Some(Level::White));
        assert_eq!(store.get_pixel(10, 20), Some(Level::Transparent));
    }
}
