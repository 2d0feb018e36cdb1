//! Field timing.
//!
//! On the OSD board the video generator raises "new field" at every
//! vertical sync. Here the PIT fires at the same rate and the timer
//! interrupt raises the flag instead. The main loop consumes it with
//! [`take`] and only then scans out and swaps.

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use x86_64::instructions::port::Port;

/// PAL: 50 fields per second, 288 visible lines each.
pub const FIELD_RATE_HZ: u32 = 50;

const PIT_BASE_HZ: u32 = 1_193_182;
const PIT_CHANNEL0: u16 = 0x40;
const PIT_COMMAND: u16 = 0x43;
/// Channel 0, lobyte/hibyte access, mode 3 (square wave).
const PIT_MODE_SQUARE: u8 = 0x36;

static NEW_FIELD: AtomicBool = AtomicBool::new(false);
static FIELDS: AtomicU64 = AtomicU64::new(0);

/// Called from the timer interrupt.
pub fn signal() {
    FIELDS.fetch_add(1, Ordering::Relaxed);
    NEW_FIELD.store(true, Ordering::Release);
}

/// Consume a pending field boundary.
pub fn take() -> bool {
    NEW_FIELD.swap(false, Ordering::AcqRel)
}

pub fn count() -> u64 {
    FIELDS.load(Ordering::Relaxed)
}

pub fn start_timer(rate_hz: u32) -> Result<(), &'static str> {
    let divisor = PIT_BASE_HZ / rate_hz.max(1);
    if divisor == 0 || divisor > u16::MAX as u32 {
        return Err("field rate outside PIT range");
    }
    let divisor = divisor as u16;

    unsafe {
        Port::<u8>::new(PIT_COMMAND).write(PIT_MODE_SQUARE);
        let mut data = Port::<u8>::new(PIT_CHANNEL0);
        data.write((divisor & 0xFF) as u8);
        data.write((divisor >> 8) as u8);
    }
    Ok(())
}
