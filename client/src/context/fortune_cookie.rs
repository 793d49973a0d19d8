//! Fortune cookie context: builds `GetFortune` instructions for either selection algorithm.

use solana_address::Address;
use solana_instruction::Instruction;
use tollgate_interface::{
    fortune_cookie::instructions::get_fortune::{
        GetFortune,
        GetFortuneInstructionData,
    },
    SYSTEM_PROGRAM_ID,
};

use crate::pda::{
    find_fortune_address,
    FortuneRequest,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FortuneCookieContext;

impl FortuneCookieContext {
    pub fn new() -> Self {
        Self
    }

    pub fn fortune_address(&self, user: &Address, request: FortuneRequest) -> Address {
        find_fortune_address(user, request).0
    }

    pub fn get_fortune(&self, user: Address, request: FortuneRequest) -> Instruction {
        GetFortune {
            fortune_data: self.fortune_address(&user, request),
            user,
            system_program: SYSTEM_PROGRAM_ID,
        }
        .create_instruction(GetFortuneInstructionData::new(
            request.counter(),
            request.selection(),
        ))
    }
}
