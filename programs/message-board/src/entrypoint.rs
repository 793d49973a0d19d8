use pinocchio::{
    account::AccountView,
    no_allocator,
    nostd_panic_handler,
    program_entrypoint,
    Address,
    ProgramResult,
};
use tollgate_interface::{
    error::MessageBoardError,
    message_board::instructions::MessageBoardInstruction,
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
        return Err(MessageBoardError::InvalidInstructionTag.into());
    };

    match MessageBoardInstruction::try_from(*tag)? {
        MessageBoardInstruction::Initialize => process_initialize(accounts, remaining),
        MessageBoardInstruction::PostMessage => process_post_message(accounts, remaining),
    }
}
