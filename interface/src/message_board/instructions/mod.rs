use crate::error::MessageBoardError;

pub mod initialize;
pub mod post_message;

pub use initialize::*;
pub use post_message::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
pub enum MessageBoardInstruction {
    Initialize,
    PostMessage,
}

impl TryFrom<u8> for MessageBoardInstruction {
    type Error = MessageBoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive instruction tag test.
            0..2 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(MessageBoardError::InvalidInstructionTag),
        }
    }
}
