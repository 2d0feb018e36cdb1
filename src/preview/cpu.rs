//! CPU tables for the preview.
//!
//! The IDT carries two entries: the PIT vector, which is the field clock,
//! and a double-fault catch on its own stack. Any other exception escalates
//! to the double fault and ends up in the panic handler over serial. The GDT
//! exists only to hold the TSS that points at that stack.

use crate::preview::{
    field,
    pic::{InterruptIndex, PICS},
};
use core::ptr::addr_of;
use spin::Lazy;
use x86_64::instructions::{
    segmentation::{Segment, CS, DS, ES, SS},
    tables::load_tss,
};
use x86_64::structures::{
    gdt::{Descriptor, GlobalDescriptorTable, SegmentSelector},
    idt::{InterruptDescriptorTable, InterruptStackFrame},
    tss::TaskStateSegment,
};
use x86_64::VirtAddr;

const FAULT_IST: u16 = 0;
const FAULT_STACK_SIZE: usize = 8 * 1024;

#[repr(align(16))]
struct FaultStack([u8; FAULT_STACK_SIZE]);

static mut FAULT_STACK: FaultStack = FaultStack([0; FAULT_STACK_SIZE]);

static TSS: Lazy<TaskStateSegment> = Lazy::new(|| {
    #[allow(unused_unsafe)]
    let bottom = VirtAddr::from_ptr(unsafe { addr_of!(FAULT_STACK) });
    let mut tss = TaskStateSegment::new();
    tss.interrupt_stack_table[FAULT_IST as usize] = bottom + FAULT_STACK_SIZE as u64;
    tss
});

struct Segments {
    table: GlobalDescriptorTable,
    code: SegmentSelector,
    data: SegmentSelector,
    tss: SegmentSelector,
}

static SEGMENTS: Lazy<Segments> = Lazy::new(|| {
    let mut table = GlobalDescriptorTable::new();
    let code = table.append(Descriptor::kernel_code_segment());
    let data = table.append(Descriptor::kernel_data_segment());
    let tss = table.append(Descriptor::tss_segment(&TSS));
    Segments { table, code, data, tss }
});

static IDT: Lazy<InterruptDescriptorTable> = Lazy::new(|| {
    let mut idt = InterruptDescriptorTable::new();
    unsafe {
        idt.double_fault
            .set_handler_fn(double_fault)
            .set_stack_index(FAULT_IST);
    }
    idt[InterruptIndex::Timer.as_u8()].set_handler_fn(field_clock);
    idt
});

/// Load the GDT, TSS and IDT. Interrupts stay disabled.
pub fn load() -> Result<(), &'static str> {
    let segments = &*SEGMENTS;
    segments.table.load();
    unsafe {
        CS::set_reg(segments.code);
        DS::set_reg(segments.data);
        ES::set_reg(segments.data);
        SS::set_reg(segments.data);
        load_tss(segments.tss);
    }
    IDT.load();
    Ok(())
}

extern "x86-interrupt" fn double_fault(frame: InterruptStackFrame, code: u64) -> ! {
    panic!("PREVIEW: double fault (code {}) at {:?}", code, frame.instruction_pointer);
}

extern "x86-interrupt" fn field_clock(_frame: InterruptStackFrame) {
    field::signal();
    unsafe {
        PICS.lock().notify_end_of_interrupt(InterruptIndex::Timer.as_u8());
    }
}
