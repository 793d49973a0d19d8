use pinocchio::{
    account::AccountView,
    no_allocator,
    nostd_panic_handler,
    program_entrypoint,
    Address,
    ProgramResult,
};
use tollgate_interface::{
    error::FortuneCookieError,
    fortune_cookie::instructions::FortuneCookieInstruction,
};

use crate::instructions::*;

program_entrypoint!(process_instruction);
no_allocator!();
nostd_panic_handler!();

#[inline(always)]
pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag, remaining @ ..] = instruction_data else {
        return Err(FortuneCookieError::InvalidInstructionTag.into());
    };

    match FortuneCookieInstruction::try_from(*tag)? {
        FortuneCookieInstruction::GetFortune => process_get_fortune(accounts, remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_rejects_missing_and_unknown_tags() {
        let program_id = crate::ID;
        assert_eq!(
            process_instruction(&program_id, &[], &[]),
            Err(FortuneCookieError::InvalidInstructionTag.into())
        );
        assert_eq!(
            process_instruction(&program_id, &[], &[1]),
            Err(FortuneCookieError::InvalidInstructionTag.into())
        );
        assert_eq!(
            process_instruction(&program_id, &[], &[FortuneCookieInstruction::GetFortune as u8]),
            Err(FortuneCookieError::NotEnoughAccountKeys.into())
        );
    }
}
