//! Canonical PDA derivation. Every address check in the program goes through these.

use pinocchio::Address;
use tollgate_interface::message_board::seeds::{
    COUNTER_SEED,
    MESSAGE_SEED,
    TREASURY_SEED,
};

#[inline(always)]
pub fn counter_address() -> (Address, u8) {
    Address::find_program_address(&[COUNTER_SEED], &crate::ID)
}

#[inline(always)]
pub fn treasury_address() -> (Address, u8) {
    Address::find_program_address(&[TREASURY_SEED], &crate::ID)
}

/// Rebuilds the counter address from a bump the program stored after a canonical search.
#[inline(always)]
pub fn counter_address_with_bump(bump: u8) -> Address {
    Address::derive_address(&[COUNTER_SEED], Some(bump), &crate::ID)
}

/// Rebuilds the treasury address from a bump the program stored after a canonical search.
#[inline(always)]
pub fn treasury_address_with_bump(bump: u8) -> Address {
    Address::derive_address(&[TREASURY_SEED], Some(bump), &crate::ID)
}

/// The address of the message posted under `index` on the board whose counter lives at `counter`.
#[inline(always)]
pub fn message_address(counter: &Address, index: u64) -> (Address, u8) {
    Address::find_program_address(
        &[MESSAGE_SEED, counter.as_ref(), &index.to_le_bytes()],
        &crate::ID,
    )
}

/// Rebuilds a message address from the index and bump stored in the message.
#[inline(always)]
pub fn message_address_with_bump(counter: &Address, index: u64, bump: u8) -> Address {
    Address::derive_address(
        &[MESSAGE_SEED, counter.as_ref(), &index.to_le_bytes()],
        Some(bump),
        &crate::ID,
    )
}
