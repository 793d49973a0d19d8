//! See [`emit_message_posted`].

use solana_instruction_view::cpi::set_return_data;
use tollgate_interface::message_board::events::MessagePostedEvent;

/// Logs the event as a single `Program data:` field and sets it as the return data.
#[inline(always)]
pub fn emit_message_posted(event: &MessagePostedEvent) {
    let bytes = event.as_bytes();
    log_data(&[bytes]);
    set_return_data(bytes);
}

#[cfg(any(target_os = "solana", target_arch = "bpf"))]
#[inline(always)]
fn log_data(fields: &[&[u8]]) {
    // Safety: the syscall reads `fields.len()` (pointer, length) pairs, which is the layout of a
    // slice of byte slices.
    unsafe {
        pinocchio::syscalls::sol_log_data(fields.as_ptr() as *const u8, fields.len() as u64);
    }
}

#[cfg(not(any(target_os = "solana", target_arch = "bpf")))]
#[inline(always)]
fn log_data(fields: &[&[u8]]) {
    core::hint::black_box(fields);
}
