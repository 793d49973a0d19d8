//! Byte-level contract of the fortune cookie program: ids, seeds, the fortune list, the selection
//! algorithms, account layouts and instruction data.

pub mod fortunes;
pub mod instructions;
pub mod selection;
pub mod state;

pub mod program {
    solana_address::declare_id!("8fCRvezhexJsx5Guy77p65rPdPV1bztSjE2a9GTTdFjA");
}

/// The fee in lamports deposited into the fortune account on top of its rent-exempt minimum.
pub const FORTUNE_FEE_LAMPORTS: u64 = 2;

pub mod seeds {
    pub const FORTUNE_SEED: &[u8] = b"fortune";
}
