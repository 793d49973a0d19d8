//! Message board context: the singleton counter and treasury addresses and the instructions that
//! use them.

use solana_address::Address;
use solana_instruction::Instruction;
use tollgate_interface::{
    message_board::instructions::{
        initialize::Initialize,
        post_message::{
            PostMessage,
            PostMessageInstructionData,
        },
    },
    SYSTEM_PROGRAM_ID,
};

use crate::pda::{
    find_counter_address,
    find_message_address,
    find_treasury_address,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageBoardContext {
    pub counter: Address,
    pub counter_bump: u8,
    pub treasury: Address,
    pub treasury_bump: u8,
}

impl Default for MessageBoardContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBoardContext {
    pub fn new() -> Self {
        let (counter, counter_bump) = find_counter_address();
        let (treasury, treasury_bump) = find_treasury_address();
        Self {
            counter,
            counter_bump,
            treasury,
            treasury_bump,
        }
    }

    pub fn message_address(&self, index: u64) -> Address {
        find_message_address(&self.counter, index).0
    }

    pub fn initialize(&self, payer: Address) -> Instruction {
        Initialize {
            counter: self.counter,
            treasury: self.treasury,
            payer,
            system_program: SYSTEM_PROGRAM_ID,
        }
        .create_instruction()
    }

    /// Builds a post for the message slot at `index`, which must be the counter's current count
    /// when the transaction lands.
    ///
    /// The content isn't validated here so that invalid posts can still be built and sent.
    pub fn post_message(&self, payer: Address, index: u64, content: &[u8]) -> Instruction {
        PostMessage {
            treasury: self.treasury,
            message: self.message_address(index),
            counter: self.counter,
            payer,
            system_program: SYSTEM_PROGRAM_ID,
        }
        .create_instruction(PostMessageInstructionData::new(content))
    }
}

#[cfg(test)]
mod tests {
    use tollgate_interface::message_board::{
        instructions::MessageBoardInstruction,
        program,
    };

    use super::*;

    #[test]
    fn post_message_targets_the_indexed_slot() {
        let board = MessageBoardContext::new();
        let payer = Address::new_unique();
        let ix = board.post_message(payer, 3, b"gm");

        assert_eq!(ix.program_id, program::ID);
        assert_eq!(ix.data[0], MessageBoardInstruction::PostMessage as u8);
        assert_eq!(ix.accounts[0].pubkey, board.treasury);
        assert_eq!(ix.accounts[1].pubkey, board.message_address(3));
        assert_eq!(ix.accounts[2].pubkey, board.counter);
        assert_eq!(ix.accounts[3].pubkey, payer);
        assert!(ix.accounts[3].is_signer);
        assert_eq!(ix.accounts[4].pubkey, SYSTEM_PROGRAM_ID);
    }

    #[test]
    fn initialize_is_tag_only() {
        let board = MessageBoardContext::new();
        let ix = board.initialize(Address::new_unique());
        assert_eq!(ix.data, [MessageBoardInstruction::Initialize as u8]);
        assert_eq!(ix.accounts.len(), 4);
    }
}
