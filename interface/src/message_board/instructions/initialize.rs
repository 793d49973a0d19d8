//! Accounts, in order:
//!
//! 0. `counter`: writable, created by the program.
//! 1. `treasury`: writable, topped up to the rent-exempt minimum if needed.
//! 2. `payer`: writable signer.
//! 3. `system_program`

use super::MessageBoardInstruction;

/// `Initialize` carries no payload: the data is the tag byte alone.
pub const INITIALIZE_DATA: [u8; 1] = [MessageBoardInstruction::Initialize as u8];

#[cfg(feature = "client")]
pub use client::*;

#[cfg(feature = "client")]
mod client {
    use solana_address::Address;
    use solana_instruction::{
        AccountMeta,
        Instruction,
    };

    use crate::message_board::program;

    pub struct Initialize {
        pub counter: Address,
        pub treasury: Address,
        pub payer: Address,
        pub system_program: Address,
    }

    impl Initialize {
        pub fn create_instruction(&self) -> Instruction {
            Instruction {
                program_id: program::ID.into(),
                accounts: [
                    AccountMeta::new(self.counter.into(), false),
                    AccountMeta::new(self.treasury.into(), false),
                    AccountMeta::new(self.payer.into(), true),
                    AccountMeta::new_readonly(self.system_program.into(), false),
                ]
                .to_vec(),
                data: super::INITIALIZE_DATA.to_vec(),
            }
        }
    }
}
