use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use tollgate_interface::{
    error::MessageBoardError,
    message_board::state::message_counter::MessageCounter,
};

use crate::shared::pda;

/// The initialized, program-owned counter PDA and a snapshot of its state at load time.
///
/// The address is checked against the bump stored in the counter, so no bump search runs here.
#[derive(Clone)]
pub struct CounterAccountView<'a> {
    pub account: &'a AccountView,
    pub count: u64,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl<'a> CounterAccountView<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<CounterAccountView<'a>, ProgramError> {
        if !account.owned_by(&crate::ID) {
            return Err(MessageBoardError::InvalidCounterOwner.into());
        }

        let (count, bump, treasury_bump) = {
            let data = account.try_borrow()?;
            let counter = MessageCounter::load_checked(&data)?;
            (counter.count(), counter.bump, counter.treasury_bump)
        };

        if account.address() != &pda::counter_address_with_bump(bump) {
            return Err(MessageBoardError::IncorrectCounterAccount.into());
        }

        Ok(Self {
            account,
            count,
            bump,
            treasury_bump,
        })
    }
}
