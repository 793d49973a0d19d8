//! PDA helpers for deriving message board and fortune cookie program addresses.

use solana_sdk::pubkey::Pubkey;
use tollgate_interface::{
    fortune_cookie::{
        self,
        seeds::FORTUNE_SEED,
        selection::FortuneSelection,
    },
    message_board::{
        self,
        seeds::{
            COUNTER_SEED,
            MESSAGE_SEED,
            TREASURY_SEED,
        },
    },
};

pub fn find_counter_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[COUNTER_SEED], &message_board::program::ID)
}

pub fn find_treasury_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED], &message_board::program::ID)
}

/// The message PDA for the post made when the counter read `index`.
pub fn find_message_address(counter: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MESSAGE_SEED, counter.as_ref(), &index.to_le_bytes()],
        &message_board::program::ID,
    )
}

/// Which fortune a user is asking for, and so which PDA it lands at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FortuneRequest {
    /// One fortune per user, picked from the first byte of the user's key.
    PerUser,
    /// One fortune per `(user, counter)` pair, picked by hashing both.
    PerRequest { counter: u64 },
}

impl FortuneRequest {
    pub fn selection(&self) -> FortuneSelection {
        match self {
            Self::PerUser => FortuneSelection::UserKey,
            Self::PerRequest { .. } => FortuneSelection::UserKeyAndCounter,
        }
    }

    /// The counter sent in the instruction data. Always zero for [`FortuneRequest::PerUser`].
    pub fn counter(&self) -> u64 {
        match self {
            Self::PerUser => 0,
            Self::PerRequest { counter } => *counter,
        }
    }
}

pub fn find_fortune_address(user: &Pubkey, request: FortuneRequest) -> (Pubkey, u8) {
    let program_id = &fortune_cookie::program::ID;
    match request {
        FortuneRequest::PerUser => {
            Pubkey::find_program_address(&[FORTUNE_SEED, user.as_ref()], program_id)
        }
        FortuneRequest::PerRequest { counter } => Pubkey::find_program_address(
            &[FORTUNE_SEED, user.as_ref(), &counter.to_le_bytes()],
            program_id,
        ),
    }
}
