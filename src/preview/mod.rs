//! # Preview Kernel Support
//!
//! Boots the overlay renderer under QEMU (or on a PC) with the pieces a
//! real OSD board gets from its video hardware faked in software:
//!
//! - `serial`: COM1 log sink for `osd_log!`
//! - `cpu`: GDT/TSS and the two-entry IDT (field clock, double fault)
//! - `pic`: the 8259 PIC, masked down to the timer line
//! - `field`: PIT-driven "new field" signal at the PAL field rate
//! - `display`: scans the overlay out onto the bootloader framebuffer
//!
//! ## Init Phases
//!
//! | Phase                | Result on failure          |
//! |----------------------|----------------------------|
//! | CPU Tables           | halt, logged over serial   |
//! | Interrupt Controller | halt, logged over serial   |
//! | Field Timer          | halt, logged over serial   |
//!
//! Interrupts stay masked until the caller enables them.

pub mod cpu;
pub mod display;
pub mod field;
pub mod pic;
pub mod serial;

use osd_overlay::osd_log;

pub fn init() -> Result<(), &'static str> {
    init_phase(1, "CPU Tables", cpu::load)?;
    init_phase(2, "Interrupt Controller", pic::init)?;
    init_phase(3, "Field Timer", || field::start_timer(field::FIELD_RATE_HZ))?;
    osd_log!("PREVIEW: ready, {} Hz fields", field::FIELD_RATE_HZ);
    Ok(())
}

fn init_phase(
    step: u8,
    name: &'static str,
    init_fn: impl FnOnce() -> Result<(), &'static str>,
) -> Result<(), &'static str> {
    osd_log!("[{}/3] Initializing {}...", step, name);
    match init_fn() {
        Ok(()) => {
            osd_log!("    ok {}", name);
            Ok(())
        }
        Err(e) => {
            osd_log!("    failed {}: {}", name, e);
            Err(e)
        }
    }
}
