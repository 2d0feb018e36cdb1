//! COM1 logging
use core::fmt::{self, Write};
use spin::Mutex;
use uart_16550::SerialPort;

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(0x3F8) });

/// Bring up the UART and route `osd_log!` to it.
pub fn init() {
    SERIAL.lock().init();
    osd_overlay::logger::init(write_line);
}

pub fn write_line(args: fmt::Arguments<'_>) {
    // The timer handler never logs, but keep it out while the port is held.
    x86_64::instructions::interrupts::without_interrupts(|| {
        let mut serial = SERIAL.lock();
        let _ = serial.write_fmt(args);
        let _ = serial.write_str("\n");
    });
}

/// Panic-path variant of [`write_line`]. Interrupts are already off and
/// nothing else runs on this core, so a port held by the interrupted code
/// is taken over instead of waited on.
pub fn write_panic_line(args: fmt::Arguments<'_>) {
    let mut serial = match SERIAL.try_lock() {
        Some(serial) => serial,
        None => {
            unsafe { SERIAL.force_unlock() };
            SERIAL.lock()
        }
    };
    let _ = serial.write_fmt(args);
    let _ = serial.write_str("\n");
}
