use pinocchio::account::AccountView;
use tollgate_interface::{
    error::FortuneCookieError,
    SYSTEM_PROGRAM_ID,
};

#[inline(always)]
pub fn verify_system_program(account: &AccountView) -> Result<(), FortuneCookieError> {
    if account.address() != &SYSTEM_PROGRAM_ID {
        return Err(FortuneCookieError::IncorrectSystemProgram);
    }
    Ok(())
}
