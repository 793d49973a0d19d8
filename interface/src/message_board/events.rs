//! The record emitted for every accepted post.
//!
//! The program writes it to the transaction log as a `Program data:` entry and also sets it as
//! the instruction's return data, so a caller can read the post's index without refetching the
//! counter.

use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        MessageBoardError,
        MessageBoardResult,
    },
    transmutable::{
        self,
        Transmutable,
    },
    LeI64,
    LeU64,
};

pub const MESSAGE_POSTED_EVENT_SIZE: usize = 88;
pub const MESSAGE_POSTED_DISCRIMINANT: u64 = u64::from_le_bytes(*b"msgpostd");

#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessagePostedEvent {
    /// The u64 event discriminant as LE bytes.
    discriminant: LeU64,
    pub poster: Address,
    /// The address of the new message account.
    pub message: Address,
    /// The i64 unix timestamp of the post as LE bytes.
    timestamp: LeI64,
    /// The u64 index the message was posted under as LE bytes.
    index: LeU64,
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for MessagePostedEvent {
    const LEN: usize = MESSAGE_POSTED_EVENT_SIZE;
}

const_assert_eq!(MESSAGE_POSTED_EVENT_SIZE, size_of::<MessagePostedEvent>());
const_assert_eq!(align_of::<MessagePostedEvent>(), 1);

impl MessagePostedEvent {
    pub fn new(poster: Address, message: Address, timestamp: i64, index: u64) -> Self {
        Self {
            discriminant: MESSAGE_POSTED_DISCRIMINANT.to_le_bytes(),
            poster,
            message,
            timestamp: timestamp.to_le_bytes(),
            index: index.to_le_bytes(),
        }
    }

    /// Loads an event from raw log or return data, checking the length and the discriminant.
    pub fn load_checked(bytes: &[u8]) -> MessageBoardResult<&Self> {
        let event = transmutable::load::<Self>(bytes)?;
        if u64::from_le_bytes(event.discriminant) != MESSAGE_POSTED_DISCRIMINANT {
            return Err(MessageBoardError::InvalidAccountDiscriminant);
        }
        Ok(event)
    }

    #[inline(always)]
    pub fn timestamp(&self) -> i64 {
        i64::from_le_bytes(self.timestamp)
    }

    #[inline(always)]
    pub fn index(&self) -> u64 {
        u64::from_le_bytes(self.index)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        transmutable::as_bytes(self)
    }
}
