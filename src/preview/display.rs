//! Scan-out onto the bootloader framebuffer using embedded-graphics
use bootloader_api::{info::PixelFormat, BootInfo};
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use osd_overlay::framebuffer::{FrameView, HEIGHT, WIDTH};

/// Bootloader framebuffer showing the overlay frame, integer scaled and
/// centred, transparent pixels painted with the backdrop.
pub struct Display {
    framebuffer: &'static mut [u8],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub bytes_per_pixel: usize,
    format: PixelFormat,
    backdrop: Rgb888,
    scale: i32,
    origin: Point,
}

impl Display {
    pub fn new(info: &'static mut BootInfo, backdrop: Rgb888) -> Result<Self, &'static str> {
        let fb = info.framebuffer.as_mut().ok_or("bootloader gave no framebuffer")?;
        let fb_info = fb.info();

        let scale = (fb_info.width / WIDTH).min(fb_info.height / HEIGHT);
        if scale == 0 {
            return Err("framebuffer smaller than the overlay");
        }
        let origin = Point::new(
            ((fb_info.width - WIDTH * scale) / 2) as i32,
            ((fb_info.height - HEIGHT * scale) / 2) as i32,
        );

        Ok(Self {
            framebuffer: fb.buffer_mut(),
            width: fb_info.width,
            height: fb_info.height,
            stride: fb_info.stride,
            bytes_per_pixel: fb_info.bytes_per_pixel,
            format: fb_info.pixel_format,
            backdrop,
            scale: scale as i32,
            origin,
        })
    }

    pub fn clear_backdrop(&mut self) {
        let rect = Rectangle::new(Point::zero(), self.size());
        rect.into_styled(PrimitiveStyle::with_fill(self.backdrop))
            .draw(self)
            .ok();
    }

    /// Copy one overlay frame to the screen.
    pub fn present(&mut self, frame: FrameView<'_>) {
        let cell = Size::new(self.scale as u32, self.scale as u32);
        for Pixel(p, level) in frame.pixels() {
            let top_left = self.origin + p * self.scale;
            let color = level.to_rgb888(self.backdrop);
            self.fill_solid(&Rectangle::new(top_left, cell), color).ok();
        }
    }
}

impl DrawTarget for Display {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }

            let offset = (y as usize * self.stride + x as usize) * self.bytes_per_pixel;
            if offset + self.bytes_per_pixel > self.framebuffer.len() {
                continue;
            }
            let px = &mut self.framebuffer[offset..offset + self.bytes_per_pixel];
            match self.format {
                PixelFormat::Rgb => {
                    px[0] = color.r();
                    px[1] = color.g();
                    px[2] = color.b();
                }
                PixelFormat::U8 => {
                    px[0] = ((color.r() as u16 + color.g() as u16 + color.b() as u16) / 3) as u8;
                }
                _ => {
                    px[0] = color.b();
                    px[1] = color.g();
                    px[2] = color.r();
                }
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Display {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
