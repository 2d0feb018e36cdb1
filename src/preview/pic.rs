//! # 8259 PIC
//!
//! Remaps IRQ 0-15 to vectors 32-47 and unmasks the timer only. The timer
//! is the one interrupt the preview needs: it stands in for vsync.
//!
//! | IRQ | Vector | Device     |
//! |-----|--------|------------|
//! | 0   | 32     | PIT timer  |

use pic8259::ChainedPics;
use spin::Mutex;
use x86_64::instructions::port::Port;

pub const PIC_1_OFFSET: u8 = 32;
pub const PIC_2_OFFSET: u8 = 40;

const PIC_1_DATA: u16 = 0x21;
const PIC_2_DATA: u16 = 0xA1;

pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptIndex {
    Timer = PIC_1_OFFSET, // IRQ0
}

impl InterruptIndex {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

pub fn init() -> Result<(), &'static str> {
    unsafe {
        PICS.lock().initialize();
        Port::<u8>::new(PIC_1_DATA).write(!0x01);
        Port::<u8>::new(PIC_2_DATA).write(0xFF);
    }
    Ok(())
}
