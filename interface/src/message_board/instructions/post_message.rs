//! Accounts, in order:
//!
//! 0. `treasury`: writable, receives the post fee.
//! 1. `message`: writable, created at the PDA for the current count.
//! 2. `counter`: writable.
//! 3. `payer`: writable signer.
//! 4. `system_program`

use crate::{
    error::{
        MessageBoardError,
        MessageBoardResult,
    },
    U32_SIZE,
};

/// The untagged `PostMessage` payload: a `u32` LE length prefix followed by that many bytes.
///
/// This is the same encoding Borsh uses for a `String`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostMessageInstructionData<'a> {
    pub content: &'a [u8],
}

impl<'a> PostMessageInstructionData<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self { content }
    }

    /// Unpacks the untagged payload. The prefix must match the remaining length exactly.
    ///
    /// The content itself isn't validated here; see [`crate::message_board::validate_content`].
    pub fn unpack_untagged(data: &'a [u8]) -> MessageBoardResult<Self> {
        let Some((len, content)) = data.split_first_chunk::<U32_SIZE>() else {
            return Err(MessageBoardError::InvalidInstructionData);
        };
        if u32::from_le_bytes(*len) as usize != content.len() {
            return Err(MessageBoardError::InvalidInstructionData);
        }
        Ok(Self { content })
    }

    /// The tagged instruction data.
    #[cfg(feature = "std")]
    pub fn pack(&self) -> std::vec::Vec<u8> {
        let mut data = std::vec::Vec::with_capacity(1 + U32_SIZE + self.content.len());
        data.push(super::MessageBoardInstruction::PostMessage as u8);
        data.extend_from_slice(&(self.content.len() as u32).to_le_bytes());
        data.extend_from_slice(self.content);
        data
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

    use super::PostMessageInstructionData;
    use crate::message_board::program;

    pub struct PostMessage {
        pub treasury: Address,
        pub message: Address,
        pub counter: Address,
        pub payer: Address,
        pub system_program: Address,
    }

    impl PostMessage {
        pub fn create_instruction(&self, data: PostMessageInstructionData) -> Instruction {
            Instruction {
                program_id: program::ID.into(),
                accounts: [
                    AccountMeta::new(self.treasury.into(), false),
                    AccountMeta::new(self.message.into(), false),
                    AccountMeta::new(self.counter.into(), false),
                    AccountMeta::new(self.payer.into(), true),
                    AccountMeta::new_readonly(self.system_program.into(), false),
                ]
                .to_vec(),
                data: data.pack(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;

    use super::*;

    #[test]
    fn unpack_checks_the_prefix() {
        let mut data = 3u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"abc");
        assert_eq!(
            PostMessageInstructionData::unpack_untagged(&data),
            Ok(PostMessageInstructionData::new(b"abc"))
        );

        // Trailing byte.
        data.push(0);
        assert_eq!(
            PostMessageInstructionData::unpack_untagged(&data),
            Err(MessageBoardError::InvalidInstructionData)
        );
        // Truncated content.
        assert_eq!(
            PostMessageInstructionData::unpack_untagged(&data[..5]),
            Err(MessageBoardError::InvalidInstructionData)
        );
        // Truncated prefix.
        assert_eq!(
            PostMessageInstructionData::unpack_untagged(&[3, 0]),
            Err(MessageBoardError::InvalidInstructionData)
        );
    }

    #[test]
    fn empty_payload_unpacks_to_empty_content() {
        let data = 0u32.to_le_bytes();
        assert_eq!(
            PostMessageInstructionData::unpack_untagged(&data).map(|d| d.content.len()),
            Ok(0)
        );
    }

    #[test]
    fn prefix_matches_borsh_string() {
        let content = String::from("gm from the board");
        let borsh_bytes = borsh::to_vec(&content).unwrap();
        let unpacked = PostMessageInstructionData::unpack_untagged(&borsh_bytes).unwrap();
        assert_eq!(unpacked.content, content.as_bytes());
    }

    #[cfg(feature = "std")]
    #[test]
    fn pack_is_tag_then_borsh_string() {
        let content = String::from("hello");
        let packed = PostMessageInstructionData::new(content.as_bytes()).pack();
        assert_eq!(packed[0], 1);
        assert_eq!(&packed[1..], borsh::to_vec(&content).unwrap().as_slice());
    }
}
