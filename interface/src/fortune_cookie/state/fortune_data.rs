use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        FortuneCookieError,
        FortuneCookieResult,
    },
    fortune_cookie::{
        fortunes::MAX_FORTUNE_LEN,
        selection::FortuneSelection,
    },
    transmutable::{
        self,
        Transmutable,
    },
    LeU64,
};

pub const FORTUNE_DATA_SIZE: usize = 184;
pub const FORTUNE_DATA_DISCRIMINANT: u64 = u64::from_le_bytes(*b"fortune\0");

#[repr(C)]
#[derive(Clone, Debug)]
pub struct FortuneData {
    /// The u64 account discriminant as LE bytes.
    discriminant: LeU64,
    /// The user that requested and paid for the fortune.
    pub user: Address,
    /// The u64 request counter as LE bytes. Always zero for [`FortuneSelection::UserKey`].
    counter: LeU64,
    /// The bump for the fortune PDA.
    pub bump: u8,
    selection: u8,
    /// The index of the fortune in [`crate::fortune_cookie::fortunes::FORTUNES`].
    pub fortune_index: u8,
    fortune_len: u8,
    fortune: [u8; MAX_FORTUNE_LEN],
    _padding: [u8; 4],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid. `selection` and `fortune_len` are checked on read.
unsafe impl Transmutable for FortuneData {
    const LEN: usize = FORTUNE_DATA_SIZE;
}

const_assert_eq!(FORTUNE_DATA_SIZE, size_of::<FortuneData>());
const_assert_eq!(align_of::<FortuneData>(), 1);

impl FortuneData {
    /// Writes a fully initialized fortune account into `dst`, which must be exactly
    /// [`FORTUNE_DATA_SIZE`] bytes.
    pub fn write(
        dst: &mut [u8],
        user: &Address,
        counter: u64,
        bump: u8,
        selection: FortuneSelection,
    ) -> FortuneCookieResult<&'static str> {
        let fortune_index = selection.fortune_index(user, counter);
        let fortune = selection.fortune(user, counter);

        let data = transmutable::load_mut::<Self>(dst)?;
        data.discriminant = FORTUNE_DATA_DISCRIMINANT.to_le_bytes();
        data.user = *user;
        data.counter = counter.to_le_bytes();
        data.bump = bump;
        data.selection = selection as u8;
        data.fortune_index = fortune_index as u8;
        data.fortune_len = fortune.len() as u8;
        data.fortune = [0; MAX_FORTUNE_LEN];
        data.fortune[..fortune.len()].copy_from_slice(fortune.as_bytes());
        data._padding = [0; 4];
        Ok(fortune)
    }

    /// Loads fortune data from account data, checking the length and the discriminant.
    pub fn load_checked(bytes: &[u8]) -> FortuneCookieResult<&Self> {
        let data = transmutable::load::<Self>(bytes)?;
        if data.discriminant() != FORTUNE_DATA_DISCRIMINANT {
            return Err(FortuneCookieError::InvalidAccountDiscriminant);
        }
        Ok(data)
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
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
    pub fn fortune(&self) -> &[u8] {
        let len = (self.fortune_len as usize).min(MAX_FORTUNE_LEN);
        &self.fortune[..len]
    }

    /// The fortune as a `&str`, or `None` if the stored bytes aren't UTF-8.
    pub fn fortune_str(&self) -> Option<&str> {
        core::str::from_utf8(self.fortune()).ok()
    }
}
