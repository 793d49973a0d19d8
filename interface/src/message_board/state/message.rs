use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        MessageBoardError,
        MessageBoardResult,
    },
    message_board::MAX_CONTENT_LEN,
    transmutable::{
        self,
        Transmutable,
    },
    LeI64,
    LeU64,
};

pub const MESSAGE_SIZE: usize = 164;
pub const MESSAGE_DISCRIMINANT: u64 = u64::from_le_bytes(*b"message\0");

/// One posted message, addressed by the counter value it was posted under.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct Message {
    /// The u64 account discriminant as LE bytes.
    discriminant: LeU64,
    /// The address that signed and paid for the post.
    pub poster: Address,
    /// The i64 unix timestamp of the post as LE bytes.
    timestamp: LeI64,
    /// The u64 counter value at post time as LE bytes.
    index: LeU64,
    /// The bump for the message PDA.
    pub bump: u8,
    content_len: u8,
    /// UTF-8 content, zero filled past `content_len`.
    content: [u8; MAX_CONTENT_LEN],
    _padding: [u8; 6],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid. `content_len` is bounds checked on read.
unsafe impl Transmutable for Message {
    const LEN: usize = MESSAGE_SIZE;
}

const_assert_eq!(MESSAGE_SIZE, size_of::<Message>());
const_assert_eq!(align_of::<Message>(), 1);

impl Message {
    /// Writes a fully initialized message into `dst`, which must be exactly [`MESSAGE_SIZE`] bytes.
    ///
    /// The content must already have passed [`crate::message_board::validate_content`].
    pub fn write(
        dst: &mut [u8],
        poster: &Address,
        timestamp: i64,
        index: u64,
        bump: u8,
        content: &[u8],
    ) -> MessageBoardResult {
        if content.len() > MAX_CONTENT_LEN {
            return Err(MessageBoardError::ContentTooLong);
        }
        let message = transmutable::load_mut::<Self>(dst)?;
        message.discriminant = MESSAGE_DISCRIMINANT.to_le_bytes();
        message.poster = *poster;
        message.timestamp = timestamp.to_le_bytes();
        message.index = index.to_le_bytes();
        message.bump = bump;
        message.content_len = content.len() as u8;
        message.content = [0; MAX_CONTENT_LEN];
        message.content[..content.len()].copy_from_slice(content);
        message._padding = [0; 6];
        Ok(())
    }

    /// Loads a message from account data, checking the length and the discriminant.
    pub fn load_checked(bytes: &[u8]) -> MessageBoardResult<&Self> {
        let message = transmutable::load::<Self>(bytes)?;
        if message.discriminant() != MESSAGE_DISCRIMINANT {
            return Err(MessageBoardError::InvalidAccountDiscriminant);
        }
        Ok(message)
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn timestamp(&self) -> i64 {
        i64::from_le_bytes(self.timestamp)
    }

    #[inline(always)]
    pub fn index(&self) -> u64 {
        u64::from_le_bytes(self.index)
    }

    /// The stored content bytes. A corrupt length is clamped to the buffer.
    #[inline(always)]
    pub fn content(&self) -> &[u8] {
        let len = (self.content_len as usize).min(MAX_CONTENT_LEN);
        &self.content[..len]
    }

    pub fn content_str(&self) -> MessageBoardResult<&str> {
        core::str::from_utf8(self.content()).map_err(|_| MessageBoardError::InvalidContentEncoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_load() {
        let poster = Address::new_from_array([9; 32]);
        let mut bytes = [0xAAu8; MESSAGE_SIZE];
        Message::write(&mut bytes, &poster, 1_700_000_000, 4, 251, b"hello").unwrap();

        let message = Message::load_checked(&bytes).unwrap();
        assert_eq!(message.poster, poster);
        assert_eq!(message.timestamp(), 1_700_000_000);
        assert_eq!(message.index(), 4);
        assert_eq!(message.bump, 251);
        assert_eq!(message.content_str(), Ok("hello"));

        // Stale bytes past the content are cleared.
        assert!(bytes[58 + 5..].iter().all(|b| *b == 0));
    }

    #[test]
    fn field_offsets() {
        let poster = Address::new_from_array([1; 32]);
        let mut bytes = [0u8; MESSAGE_SIZE];
        Message::write(&mut bytes, &poster, -5, u64::MAX, 7, b"x").unwrap();

        assert_eq!(&bytes[0..8], b"message\0");
        assert_eq!(&bytes[8..40], &[1; 32]);
        assert_eq!(&bytes[40..48], &(-5i64).to_le_bytes());
        assert_eq!(&bytes[48..56], &u64::MAX.to_le_bytes());
        assert_eq!(bytes[56], 7);
        assert_eq!(bytes[57], 1);
        assert_eq!(bytes[58], b'x');
    }

    #[test]
    fn rejects_wrong_size_or_kind() {
        let mut bytes = [0u8; MESSAGE_SIZE];
        assert_eq!(
            Message::load_checked(&bytes).err(),
            Some(MessageBoardError::InvalidAccountDiscriminant)
        );
        assert_eq!(
            Message::write(&mut bytes[1..], &Address::new_from_array([0; 32]), 0, 0, 0, b"a"),
            Err(MessageBoardError::InsufficientByteLength)
        );
        assert_eq!(
            Message::write(&mut bytes, &Address::new_from_array([0; 32]), 0, 0, 0, &[b'a'; 101]),
            Err(MessageBoardError::ContentTooLong)
        );
    }
}
