use crate::error::FortuneCookieError;

pub mod get_fortune;

pub use get_fortune::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
pub enum FortuneCookieInstruction {
    GetFortune,
}

impl TryFrom<u8> for FortuneCookieInstruction {
    type Error = FortuneCookieError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::GetFortune),
            _ => Err(FortuneCookieError::InvalidInstructionTag),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::FortuneCookieInstruction;

    #[test]
    fn test_instruction_tag_from_u8_exhaustive() {
        for variant in FortuneCookieInstruction::iter() {
            assert_eq!(
                FortuneCookieInstruction::try_from(variant as u8).unwrap(),
                variant
            );
        }
        for v in 0..=u8::MAX {
            assert_eq!(
                FortuneCookieInstruction::from_repr(v).is_none(),
                FortuneCookieInstruction::try_from(v).is_err(),
            );
        }
    }
}
