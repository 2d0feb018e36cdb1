//! # Logging
//!
//! The renderer has no output device of its own. Whoever owns one (a UART,
//! a debug adapter, a test capture) installs a sink with [`init`] and every
//! `osd_log!` call is forwarded there. Without a sink, logging is a no-op.
//!
//! Nothing on the per-pixel path logs.

use core::fmt;
use spin::Mutex;

/// Receives one formatted log line, without trailing newline.
pub type Sink = fn(fmt::Arguments<'_>);

static SINK: Mutex<Option<Sink>> = Mutex::new(None);

pub fn init(sink: Sink) {
    *SINK.lock() = Some(sink);
}

pub fn disable() {
    *SINK.lock() = None;
}

pub fn log(args: fmt::Arguments<'_>) {
    // Copy the sink out so it runs without the lock held.
    let sink = *SINK.lock();
    if let Some(sink) = sink {
        sink(args);
    }
}

#[macro_export]
macro_rules! osd_log {
    ($($arg:tt)*) => {
        $crate::logger::log(core::format_args!($($arg)*))
    };
}
