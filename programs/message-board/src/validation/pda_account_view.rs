use pinocchio::{
    account::AccountView,
    Address,
};
use tollgate_interface::error::MessageBoardError;

/// An account whose address matched a canonical PDA, along with that PDA's bump.
#[derive(Clone)]
pub struct PdaAccountView<'a> {
    pub account: &'a AccountView,
    pub bump: u8,
}

impl<'a> PdaAccountView<'a> {
    /// Checks `account` against the derived `(address, bump)` pair and fails with `mismatch`.
    #[inline(always)]
    pub fn new(
        account: &'a AccountView,
        (expected, bump): (Address, u8),
        mismatch: MessageBoardError,
    ) -> Result<PdaAccountView<'a>, MessageBoardError> {
        if account.address() != &expected {
            return Err(mismatch);
        }
        Ok(Self { account, bump })
    }
}
