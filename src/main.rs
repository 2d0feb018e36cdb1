#![no_std]
#![no_main]
#![feature(abi_x86_interrupt)]

extern crate rlibc;

use bootloader_api::{entry_point, BootInfo};
use core::panic::PanicInfo;
use embedded_graphics::pixelcolor::Rgb888;
use osd_overlay::{osd_log, Overlay};
use spin::Mutex;

use crate::preview::{display::Display, field, serial};

mod preview;

entry_point!(kernel_main);

/// Stand-in for the camera picture behind transparent pixels.
const BACKDROP: Rgb888 = Rgb888::new(24, 48, 96);

/// Fields the checkerboard stays up before the cube demo starts.
const SELF_TEST_FIELDS: u64 = 2 * field::FIELD_RATE_HZ as u64;

// Kept out of the boot stack: two frames are ~50 KiB.
static OVERLAY: Mutex<Overlay> = Mutex::new(Overlay::new());

pub fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
    serial::init();

    if let Err(e) = preview::init() {
        osd_log!("PREVIEW: initialization failed: {}", e);
        halt_loop();
    }

    let mut display = match Display::new(boot_info, BACKDROP) {
        Ok(display) => display,
        Err(e) => {
            osd_log!("PREVIEW: no framebuffer: {}", e);
            halt_loop();
        }
    };
    display.clear_backdrop();

    let mut overlay = OVERLAY.lock();
    overlay.render_init();
    overlay.self_test();

    x86_64::instructions::interrupts::enable();

    loop {
        let ready = field::take();
        if ready {
            display.present(overlay.scanout());
        }
        if field::count() > SELF_TEST_FIELDS {
            overlay.render_tick(ready);
        }
        x86_64::instructions::hlt();
    }
}

fn halt_loop() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    x86_64::instructions::interrupts::disable();
    serial::write_panic_line(format_args!("PANIC : {} | {:?}", info.message(), info.location()));
    halt_loop()
}
