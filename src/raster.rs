//! Drawing primitives on the active buffer.
//!
//! Everything here ends in `PixelStore::set_pixel`, so off-buffer parts of
//! a shape are clipped one pixel at a time. Lines also skip their
//! off-buffer stretch along the major axis before stepping.

use crate::framebuffer::{color::Level, store::PixelStore, HEIGHT, WIDTH};
use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

/// Edge length of one checkerboard square.
pub const CHECKER_BLOCK: usize = 16;

impl PixelStore {
    /// Draw a 1 pixel wide line using Bresenham's algorithm, both endpoints
    /// included.
    ///
    /// The pixels are those of the classic error-stepping loop, where the
    /// major axis advances every step and the minor axis advances by
    /// rounding. Only the stretch of the major axis that lies inside the
    /// buffer is walked, so the cost is bounded by the buffer size whatever
    /// the endpoints.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, level: Level) {
        // Step from the lower endpoint so both argument orders give the
        // same pixels.
        let ((x0, y0), (x1, y1)) = if (y0, x0) <= (y1, x1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };

        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = y1 - y0;
        let sx = if x0 < x1 { 1 } else { -1 };

        if dx >= dy {
            let Some((first, last)) = steps_inside(x0, sx, dx, WIDTH) else {
                return;
            };
            for k in first..=last {
                let y = y0 + minor_offset(k, dy, dx);
                if y >= HEIGHT as i64 {
                    break;
                }
                self.set_pixel((x0 + sx * k) as i32, y as i32, level);
            }
        } else {
            let Some((first, last)) = steps_inside(y0, 1, dy, HEIGHT) else {
                return;
            };
            for k in first..=last {
                let x = x0 + sx * minor_offset(k, dx, dy);
                if (sx > 0 && x >= WIDTH as i64) || (sx < 0 && x < 0) {
                    break;
                }
                self.set_pixel(x as i32, (y0 + k) as i32, level);
            }
        }
    }

    /// Connect consecutive points with lines.
    pub fn draw_polyline(&mut self, points: &[Point], level: Level) {
        for pair in points.windows(2) {
            self.draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, level);
        }
    }

    /// Fill a rectangular region
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, level: Level) {
        let rect = Rectangle::new(Point::new(x, y), Size::new(width, height));
        rect.into_styled(PrimitiveStyle::with_fill(level))
            .draw(self)
            .ok();
    }

    /// Self-test pattern: `CHECKER_BLOCK` squares alternating `even` and
    /// `odd` over the left half of the buffer. The right half is untouched.
    pub fn draw_checkerboard(&mut self, even: Level, odd: Level) {
        let levels = [even, odd];
        for y in 0..HEIGHT {
            for x in 0..WIDTH / 2 {
                let block = x / CHECKER_BLOCK + y / CHECKER_BLOCK;
                self.set_pixel(x as i32, y as i32, levels[block % 2]);
            }
        }
    }
}

/// Range of steps `k` in `0..=len` for which `start + step * k` lies in
/// `0..limit`.
fn steps_inside(start: i64, step: i64, len: i64, limit: usize) -> Option<(i64, i64)> {
    let limit = limit as i64;
    let (first, last) = if step > 0 {
        (-start, limit - 1 - start)
    } else {
        (start - (limit - 1), start)
    };
    let (first, last) = (first.max(0), last.min(len));
    (first <= last).then_some((first, last))
}

/// Minor-axis offset after `k` major steps, rounding half up.
fn minor_offset(k: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let (k, minor, major) = (k as i128, minor as i128, major as i128);
    ((2 * minor * k + major) / (2 * major)) as i64
}

impl DrawTarget for PixelStore {
    type Color = Level;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, level) in pixels {
            self.set_pixel(x, y, level);
        }
        Ok(())
    }

    fn clear(&mut self, level: Self::Color) -> Result<(), Self::Error> {
        PixelStore::clear(self, level);
        Ok(())
    }
}

impl OriginDimensions for PixelStore {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
