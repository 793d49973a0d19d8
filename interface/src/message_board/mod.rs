//! Byte-level contract of the message board program: ids, seeds, account layouts and instruction
//! data.

use crate::error::{
    MessageBoardError,
    MessageBoardResult,
};

pub mod events;
pub mod instructions;
pub mod state;

pub mod program {
    solana_address::declare_id!("42Wr5wYojEHWwDFHRfLjyHxLSBQETJZ58XKihcm2Lfcn");
}

/// The exact fee in lamports moved from the poster to the treasury on every accepted post.
pub const POST_FEE_LAMPORTS: u64 = 69;

/// The maximum message content length in bytes.
pub const MAX_CONTENT_LEN: usize = 100;

pub mod seeds {
    pub const COUNTER_SEED: &[u8] = b"counter";
    pub const TREASURY_SEED: &[u8] = b"treasury";
    pub const MESSAGE_SEED: &[u8] = b"message";
}

/// Checks that `content` is 1 to [`MAX_CONTENT_LEN`] bytes of UTF-8 and returns it as a `&str`.
///
/// The length is checked before the encoding so an oversized payload is always reported as
/// [`MessageBoardError::ContentTooLong`].
pub fn validate_content(content: &[u8]) -> MessageBoardResult<&str> {
    if content.len() > MAX_CONTENT_LEN {
        return Err(MessageBoardError::ContentTooLong);
    }
    if content.is_empty() {
        return Err(MessageBoardError::EmptyContent);
    }
    core::str::from_utf8(content).map_err(|_| MessageBoardError::InvalidContentEncoding)
}
