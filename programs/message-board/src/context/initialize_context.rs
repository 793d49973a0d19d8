//! See [`InitializeContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use tollgate_interface::error::MessageBoardError;

use crate::{
    shared::pda,
    validation::{
        pda_account_view::PdaAccountView,
        signer_view::SignerView,
        system_program::verify_system_program,
    },
};

/// The account context for the `Initialize` instruction.
#[derive(Clone)]
pub struct InitializeContext<'a> {
    pub counter: PdaAccountView<'a>,
    pub treasury: PdaAccountView<'a>,
    pub payer: SignerView<'a>,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitializeContext<'a>, ProgramError> {
        let [counter, treasury, payer, system_program, ..] = accounts else {
            return Err(MessageBoardError::NotEnoughAccountKeys.into());
        };

        let payer = SignerView::new(payer)?;
        let counter = PdaAccountView::new(
            counter,
            pda::counter_address(),
            MessageBoardError::IncorrectCounterAccount,
        )?;
        let treasury = PdaAccountView::new(
            treasury,
            pda::treasury_address(),
            MessageBoardError::IncorrectTreasuryAccount,
        )?;

        if counter.account.data_len() != 0 {
            return Err(MessageBoardError::AlreadyInitialized.into());
        }

        verify_system_program(system_program)?;

        Ok(Self {
            counter,
            treasury,
            payer,
        })
    }
}

#[cfg(test)]
mod tests {
    use pinocchio::{
        error::ProgramError,
        Address,
    };
    use tollgate_interface::{
        error::MessageBoardError,
        message_board::state::message_counter::{
            MessageCounter,
            MESSAGE_COUNTER_SIZE,
        },
    };

    use super::InitializeContext;
    use crate::{
        shared::pda,
        validation::mock::{
            empty,
            system_program,
            MockAccount,
        },
    };

    fn err(e: MessageBoardError) -> Option<ProgramError> {
        Some(e.into())
    }

    #[test]
    fn loads_canonical_accounts() {
        let (counter_address, counter_bump) = pda::counter_address();
        let (treasury_address, treasury_bump) = pda::treasury_address();
        let mut counter = empty(counter_address);
        let mut treasury = empty(treasury_address);
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();
        let accounts = [counter.view(), treasury.view(), payer.view(), system.view()];

        let ctx = InitializeContext::load(&accounts).unwrap();
        assert_eq!(ctx.counter.bump, counter_bump);
        assert_eq!(ctx.treasury.bump, treasury_bump);
        assert_eq!(ctx.payer.account.address(), accounts[2].address());
    }

    #[test]
    fn rejects_bad_accounts() {
        let (counter_address, _) = pda::counter_address();
        let (treasury_address, _) = pda::treasury_address();
        let stranger = Address::new_from_array([7; 32]);

        let mut counter = empty(counter_address);
        let mut treasury = empty(treasury_address);
        let mut wrong = empty(stranger);
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut unsigned_payer = empty(Address::new_from_array([2; 32]));
        let mut system = system_program();

        let short = [counter.view(), treasury.view(), payer.view()];
        assert_eq!(
            InitializeContext::load(&short).err(),
            err(MessageBoardError::NotEnoughAccountKeys)
        );

        let unsigned = [counter.view(), treasury.view(), unsigned_payer.view(), system.view()];
        assert_eq!(
            InitializeContext::load(&unsigned).err(),
            Some(ProgramError::MissingRequiredSignature)
        );

        let bad_counter = [wrong.view(), treasury.view(), payer.view(), system.view()];
        assert_eq!(
            InitializeContext::load(&bad_counter).err(),
            err(MessageBoardError::IncorrectCounterAccount)
        );

        let bad_treasury = [counter.view(), wrong.view(), payer.view(), system.view()];
        assert_eq!(
            InitializeContext::load(&bad_treasury).err(),
            err(MessageBoardError::IncorrectTreasuryAccount)
        );

        let bad_system = [counter.view(), treasury.view(), payer.view(), wrong.view()];
        assert_eq!(
            InitializeContext::load(&bad_system).err(),
            err(MessageBoardError::IncorrectSystemProgram)
        );
    }

    #[test]
    fn rejects_existing_counter() {
        let (counter_address, bump) = pda::counter_address();
        let (treasury_address, treasury_bump) = pda::treasury_address();
        let mut data = [0u8; MESSAGE_COUNTER_SIZE];
        data.copy_from_slice(MessageCounter::new(0, bump, treasury_bump).as_bytes());

        let mut counter = MockAccount::new(counter_address, crate::ID, data);
        let mut treasury = empty(treasury_address);
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();
        let accounts = [counter.view(), treasury.view(), payer.view(), system.view()];

        assert_eq!(
            InitializeContext::load(&accounts).err(),
            err(MessageBoardError::AlreadyInitialized)
        );
    }
}
