use solana_program_error::ProgramError;

use crate::transmutable::InsufficientByteLength;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[repr(u8)]
pub enum MessageBoardError {
    InvalidInstructionTag,
    InvalidInstructionData,
    NotEnoughAccountKeys,
    ContentTooLong,
    EmptyContent,
    InvalidContentEncoding,
    AlreadyInitialized,
    IncorrectCounterAccount,
    IncorrectTreasuryAccount,
    IncorrectMessageAccount,
    InvalidCounterOwner,
    InvalidAccountDiscriminant,
    InsufficientByteLength,
    CounterOverflow,
    IncorrectSystemProgram,
    MessageAlreadyExists,
}

impl From<MessageBoardError> for ProgramError {
    #[inline(always)]
    fn from(e: MessageBoardError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<InsufficientByteLength> for MessageBoardError {
    #[inline(always)]
    fn from(_: InsufficientByteLength) -> Self {
        MessageBoardError::InsufficientByteLength
    }
}

impl From<MessageBoardError> for &'static str {
    fn from(value: MessageBoardError) -> Self {
        match value {
            MessageBoardError::InvalidInstructionTag => "Invalid instruction tag",
            MessageBoardError::InvalidInstructionData => "Invalid instruction data",
            MessageBoardError::NotEnoughAccountKeys => "Not enough account keys passed",
            MessageBoardError::ContentTooLong => "Message too long, max 100 bytes",
            MessageBoardError::EmptyContent => "Message content is empty",
            MessageBoardError::InvalidContentEncoding => "Message content is not valid UTF-8",
            MessageBoardError::AlreadyInitialized => "The message board is already initialized",
            MessageBoardError::IncorrectCounterAccount => "Incorrect counter account",
            MessageBoardError::IncorrectTreasuryAccount => "Incorrect treasury account",
            MessageBoardError::IncorrectMessageAccount => "Incorrect message account",
            MessageBoardError::InvalidCounterOwner => "Counter isn't owned by the message board",
            MessageBoardError::InvalidAccountDiscriminant => "Invalid account discriminant",
            MessageBoardError::InsufficientByteLength => "Not enough bytes passed",
            MessageBoardError::CounterOverflow => "Message counter overflowed",
            MessageBoardError::IncorrectSystemProgram => "Incorrect system program",
            MessageBoardError::MessageAlreadyExists => "A message already exists at that address",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for MessageBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self, <&'static str>::from(*self))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[repr(u8)]
pub enum FortuneCookieError {
    InvalidInstructionTag,
    InvalidInstructionData,
    NotEnoughAccountKeys,
    InsufficientPayment,
    IncorrectFortuneAccount,
    AlreadyInitialized,
    InvalidSelection,
    InvalidAccountDiscriminant,
    InsufficientByteLength,
    IncorrectSystemProgram,
}

impl From<FortuneCookieError> for ProgramError {
    #[inline(always)]
    fn from(e: FortuneCookieError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<InsufficientByteLength> for FortuneCookieError {
    #[inline(always)]
    fn from(_: InsufficientByteLength) -> Self {
        FortuneCookieError::InsufficientByteLength
    }
}

impl From<FortuneCookieError> for &'static str {
    fn from(value: FortuneCookieError) -> Self {
        match value {
            FortuneCookieError::InvalidInstructionTag => "Invalid instruction tag",
            FortuneCookieError::InvalidInstructionData => "Invalid instruction data",
            FortuneCookieError::NotEnoughAccountKeys => "Not enough account keys passed",
            FortuneCookieError::InsufficientPayment => "Insufficient payment, 2 lamports required",
            FortuneCookieError::IncorrectFortuneAccount => "Incorrect fortune account",
            FortuneCookieError::AlreadyInitialized => "Fortune account already exists",
            FortuneCookieError::InvalidSelection => "Invalid fortune selection",
            FortuneCookieError::InvalidAccountDiscriminant => "Invalid account discriminant",
            FortuneCookieError::InsufficientByteLength => "Not enough bytes passed",
            FortuneCookieError::IncorrectSystemProgram => "Incorrect system program",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for FortuneCookieError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self, <&'static str>::from(*self))
    }
}

pub type MessageBoardResult<T = ()> = Result<T, MessageBoardError>;
pub type FortuneCookieResult<T = ()> = Result<T, FortuneCookieError>;
