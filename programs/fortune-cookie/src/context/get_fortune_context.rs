//! See [`GetFortuneContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use tollgate_interface::{
    error::FortuneCookieError,
    fortune_cookie::{
        instructions::GetFortuneInstructionData,
        selection::FortuneSelection,
        FORTUNE_FEE_LAMPORTS,
    },
};

use crate::{
    shared::pda,
    validation::{
        signer_view::SignerView,
        system_program::verify_system_program,
    },
};

/// The account context for the `GetFortune` instruction, with its payload already validated.
#[derive(Clone)]
pub struct GetFortuneContext<'a> {
    pub fortune_data: &'a AccountView,
    pub user: SignerView<'a>,
    pub selection: FortuneSelection,
    /// The request counter. Always zero for [`FortuneSelection::UserKey`].
    pub counter: u64,
    pub bump: u8,
}

impl<'a> GetFortuneContext<'a> {
    /// Checks, in order: the user's signature, the payload, the fortune PDA, that the fortune
    /// account is new, and that the user can pay the fee.
    pub fn load(
        accounts: &'a [AccountView],
        instruction_data: &[u8],
    ) -> Result<GetFortuneContext<'a>, ProgramError> {
        let [fortune_data, user, system_program, ..] = accounts else {
            return Err(FortuneCookieError::NotEnoughAccountKeys.into());
        };

        let user = SignerView::new(user)?;

        let data = GetFortuneInstructionData::unpack_untagged(instruction_data)?;
        let selection = data.selection()?;
        let counter = match selection {
            FortuneSelection::UserKey => 0,
            FortuneSelection::UserKeyAndCounter => data.counter(),
        };

        let (expected, bump) = pda::fortune_address(user.account.address(), selection, counter);
        if fortune_data.address() != &expected {
            return Err(FortuneCookieError::IncorrectFortuneAccount.into());
        }

        if fortune_data.data_len() != 0 {
            return Err(FortuneCookieError::AlreadyInitialized.into());
        }

        if user.account.lamports() < FORTUNE_FEE_LAMPORTS {
            return Err(FortuneCookieError::InsufficientPayment.into());
        }

        verify_system_program(system_program)?;

        Ok(Self {
            fortune_data,
            user,
            selection,
            counter,
            bump,
        })
    }
}
