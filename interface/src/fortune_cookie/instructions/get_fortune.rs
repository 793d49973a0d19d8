//! Accounts, in order:
//!
//! 0. `fortune_data`: writable, created by the program.
//! 1. `user`: writable signer.
//! 2. `system_program`

use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use super::FortuneCookieInstruction;
use crate::{
    error::{
        FortuneCookieError,
        FortuneCookieResult,
    },
    fortune_cookie::selection::FortuneSelection,
    pack::{
        write_bytes,
        Pack,
    },
    transmutable::{
        self,
        Transmutable,
    },
    LeU64,
};

pub const GET_FORTUNE_DATA_SIZE: usize = 9;
pub const GET_FORTUNE_TAGGED_SIZE: usize = GET_FORTUNE_DATA_SIZE + 1;

/// The untagged `GetFortune` payload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GetFortuneInstructionData {
    /// The u64 request counter as LE bytes.
    counter: LeU64,
    /// The raw [`FortuneSelection`] byte. Validated by the program, not on unpack.
    selection: u8,
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for GetFortuneInstructionData {
    const LEN: usize = GET_FORTUNE_DATA_SIZE;
}

const_assert_eq!(GET_FORTUNE_DATA_SIZE, size_of::<GetFortuneInstructionData>());
const_assert_eq!(align_of::<GetFortuneInstructionData>(), 1);

impl GetFortuneInstructionData {
    pub fn new(counter: u64, selection: FortuneSelection) -> Self {
        Self {
            counter: counter.to_le_bytes(),
            selection: selection as u8,
        }
    }

    /// Unpacks the untagged payload. The length must be exact.
    #[inline(always)]
    pub fn unpack_untagged(data: &[u8]) -> FortuneCookieResult<&Self> {
        transmutable::load::<Self>(data).map_err(|_| FortuneCookieError::InvalidInstructionData)
    }

    #[inline(always)]
    pub fn counter(&self) -> u64 {
        u64::from_le_bytes(self.counter)
    }

    #[inline(always)]
    pub fn selection(&self) -> FortuneCookieResult<FortuneSelection> {
        FortuneSelection::try_from(self.selection)
    }

    #[inline(always)]
    pub fn raw_selection(&self) -> u8 {
        self.selection
    }
}

// Safety: `pack_into_slice` writes the tag and all 9 payload bytes.
unsafe impl Pack<GET_FORTUNE_TAGGED_SIZE> for GetFortuneInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; GET_FORTUNE_TAGGED_SIZE]) {
        write_bytes(&mut dst[0..1], &[FortuneCookieInstruction::GetFortune as u8]);
        write_bytes(&mut dst[1..9], &self.counter);
        write_bytes(&mut dst[9..10], &[self.selection]);
    }
}

#[cfg(feature = "client")]
pub use client::*;

#[cfg(feature = "client")]
mod client {
    use solana_address::Address;
    use solana_instruction::{
        AccountMeta,
        Instruction,
    };

    use super::GetFortuneInstructionData;
    use crate::{
        fortune_cookie::program,
        pack::Pack,
    };

    pub struct GetFortune {
        pub fortune_data: Address,
        pub user: Address,
        pub system_program: Address,
    }

    impl GetFortune {
        pub fn create_instruction(&self, data: GetFortuneInstructionData) -> Instruction {
            Instruction {
                program_id: program::ID.into(),
                accounts: [
                    AccountMeta::new(self.fortune_data.into(), false),
                    AccountMeta::new(self.user.into(), true),
                    AccountMeta::new_readonly(self.system_program.into(), false),
                ]
                .to_vec(),
                data: data.pack().to_vec(),
            }
        }
    }
}
