use pinocchio::{
    account::AccountView,
    error::ProgramError,
};

/// An account that signed the transaction.
#[derive(Clone)]
pub struct SignerView<'a> {
    pub account: &'a AccountView,
}

impl<'a> SignerView<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<SignerView<'a>, ProgramError> {
        if !account.is_signer() {
            return Err(ProgramError::MissingRequiredSignature);
        }
        Ok(Self { account })
    }
}
