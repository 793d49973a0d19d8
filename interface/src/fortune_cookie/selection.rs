use solana_address::Address;

use crate::{
    error::FortuneCookieError,
    fortune_cookie::fortunes::FORTUNES,
};

/// How a fortune is picked and which PDA it is stored at.
///
/// Both variants are live: each matches one deployed revision of the program.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter, strum_macros::Display)
)]
pub enum FortuneSelection {
    /// `FORTUNES[user[0] % len]`, stored at `["fortune", user]`. One fortune per user.
    UserKey,
    /// `FORTUNES[fnv1a64(user ‖ counter_le) % len]`, stored at `["fortune", user, counter_le]`.
    UserKeyAndCounter,
}

impl TryFrom<u8> for FortuneSelection {
    type Error = FortuneCookieError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::UserKey),
            1 => Ok(Self::UserKeyAndCounter),
            _ => Err(FortuneCookieError::InvalidSelection),
        }
    }
}

impl FortuneSelection {
    /// Returns the index into [`FORTUNES`] for `user` and `counter`.
    ///
    /// `counter` is ignored by [`FortuneSelection::UserKey`].
    pub fn fortune_index(self, user: &Address, counter: u64) -> usize {
        let user = user.as_ref();
        match self {
            Self::UserKey => user[0] as usize % FORTUNES.len(),
            Self::UserKeyAndCounter => {
                (fnv1a64(&[user, &counter.to_le_bytes()]) % FORTUNES.len() as u64) as usize
            }
        }
    }

    pub fn fortune(self, user: &Address, counter: u64) -> &'static str {
        FORTUNES[self.fortune_index(user, counter)]
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001b3;

/// 64-bit FNV-1a over the concatenation of `parts`. Stable across targets and toolchains.
pub fn fnv1a64(parts: &[&[u8]]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for part in parts {
        for byte in *part {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}
