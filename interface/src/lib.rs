#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod fortune_cookie;
pub mod message_board;
pub mod pack;
pub mod transmutable;

pub type LeU64 = [u8; U64_SIZE];
pub type LeI64 = [u8; I64_SIZE];

pub const U32_SIZE: usize = core::mem::size_of::<u32>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const I64_SIZE: usize = core::mem::size_of::<i64>();
pub const ADDRESS_SIZE: usize = 32;

pub const SYSTEM_PROGRAM_ID: solana_address::Address =
    solana_address::Address::new_from_array([0; 32]);
