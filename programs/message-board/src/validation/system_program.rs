use pinocchio::account::AccountView;
use tollgate_interface::{
    error::MessageBoardError,
    SYSTEM_PROGRAM_ID,
};

#[inline(always)]
pub fn verify_system_program(account: &AccountView) -> Result<(), MessageBoardError> {
    if account.address() != &SYSTEM_PROGRAM_ID {
        return Err(MessageBoardError::IncorrectSystemProgram);
    }
    Ok(())
}
