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
    LeU64,
};

pub const MESSAGE_COUNTER_SIZE: usize = 24;
pub const MESSAGE_COUNTER_DISCRIMINANT: u64 = u64::from_le_bytes(*b"msgcount");

/// The singleton counter PDA. It also stores the treasury's bump so the program never has to
/// search for it again.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct MessageCounter {
    /// The u64 account discriminant as LE bytes.
    discriminant: LeU64,
    /// The u64 number of accepted posts as LE bytes. Doubles as the next post's index.
    count: LeU64,
    /// The bump for the counter PDA.
    pub bump: u8,
    /// The bump for the treasury PDA.
    pub treasury_bump: u8,
    _padding: [u8; 6],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for MessageCounter {
    const LEN: usize = MESSAGE_COUNTER_SIZE;
}

const_assert_eq!(MESSAGE_COUNTER_SIZE, size_of::<MessageCounter>());
const_assert_eq!(align_of::<MessageCounter>(), 1);

impl MessageCounter {
    pub fn new(count: u64, bump: u8, treasury_bump: u8) -> Self {
        MessageCounter {
            discriminant: MESSAGE_COUNTER_DISCRIMINANT.to_le_bytes(),
            count: count.to_le_bytes(),
            bump,
            treasury_bump,
            _padding: [0; 6],
        }
    }

    /// Loads a counter from account data, checking the length and the discriminant.
    pub fn load_checked(bytes: &[u8]) -> MessageBoardResult<&Self> {
        let counter = transmutable::load::<Self>(bytes)?;
        counter.verify_discriminant()?;
        Ok(counter)
    }

    pub fn load_checked_mut(bytes: &mut [u8]) -> MessageBoardResult<&mut Self> {
        let counter = transmutable::load_mut::<Self>(bytes)?;
        counter.verify_discriminant()?;
        Ok(counter)
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> MessageBoardResult {
        if self.discriminant() != MESSAGE_COUNTER_DISCRIMINANT {
            return Err(MessageBoardError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn count(&self) -> u64 {
        u64::from_le_bytes(self.count)
    }

    /// Increments the count by one and returns the new count.
    #[inline(always)]
    pub fn increment_count(&mut self) -> MessageBoardResult<u64> {
        let next = self
            .count()
            .checked_add(1)
            .ok_or(MessageBoardError::CounterOverflow)?;
        self.count = next.to_le_bytes();
        Ok(next)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        transmutable::as_bytes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let counter = MessageCounter::new(7, 254, 253);
        let bytes = counter.as_bytes();
        assert_eq!(&bytes[0..8], b"msgcount");
        assert_eq!(&bytes[8..16], &7u64.to_le_bytes());
        assert_eq!(bytes[16], 254);
        assert_eq!(bytes[17], 253);
        assert_eq!(&bytes[18..], &[0; 6]);
    }

    #[test]
    fn load_checks_length_and_discriminant() {
        let counter = MessageCounter::new(3, 1, 2);
        let mut bytes = [0u8; MESSAGE_COUNTER_SIZE];
        bytes.copy_from_slice(counter.as_bytes());

        assert_eq!(MessageCounter::load_checked(&bytes).unwrap().count(), 3);
        assert_eq!(
            MessageCounter::load_checked(&bytes[..MESSAGE_COUNTER_SIZE - 1]).err(),
            Some(MessageBoardError::InsufficientByteLength)
        );

        bytes[0] ^= 1;
        assert_eq!(
            MessageCounter::load_checked(&bytes).err(),
            Some(MessageBoardError::InvalidAccountDiscriminant)
        );
    }

    #[test]
    fn increment_is_checked() {
        let mut counter = MessageCounter::new(0, 0, 0);
        assert_eq!(counter.increment_count(), Ok(1));
        assert_eq!(counter.increment_count(), Ok(2));
        assert_eq!(counter.count(), 2);

        let mut full = MessageCounter::new(u64::MAX, 0, 0);
        assert_eq!(full.increment_count(), Err(MessageBoardError::CounterOverflow));
        assert_eq!(full.count(), u64::MAX);
    }
}
