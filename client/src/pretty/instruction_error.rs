//! Interprets RPC and on-chain errors into readable message board, fortune cookie or Solana
//! instruction error messages.

use std::fmt::Display;

use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError as SolanaInstructionError;
use solana_transaction_error::TransactionError;
use tollgate_interface::{
    error::{
        FortuneCookieError,
        MessageBoardError,
    },
    fortune_cookie::{
        self,
        instructions::FortuneCookieInstruction,
    },
    message_board::{
        self,
        instructions::MessageBoardInstruction,
    },
};

use crate::{
    fmt_kv,
    LogColor,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstructionError {
    Solana {
        instruction_tag: Option<u8>,
        error: SolanaInstructionError,
    },
    MessageBoard {
        instruction: MessageBoardInstruction,
        error: MessageBoardError,
    },
    FortuneCookie {
        instruction: FortuneCookieInstruction,
        error: FortuneCookieError,
    },
}

impl InstructionError {
    /// Decodes `error` raised by `instruction`. Custom codes are only mapped to a program error
    /// when the instruction targets that program and both the tag and code are known.
    pub fn from_instruction(instruction: &Instruction, error: SolanaInstructionError) -> Self {
        let instruction_tag = instruction.data.first().copied();
        if let (SolanaInstructionError::Custom(code), Some(tag)) = (&error, instruction_tag) {
            let code = u8::try_from(*code).ok();
            if instruction.program_id == message_board::program::ID {
                let decoded = MessageBoardInstruction::try_from(tag)
                    .ok()
                    .zip(code.and_then(MessageBoardError::from_repr));
                if let Some((instruction, error)) = decoded {
                    return Self::MessageBoard { instruction, error };
                }
            } else if instruction.program_id == fortune_cookie::program::ID {
                let decoded = FortuneCookieInstruction::try_from(tag)
                    .ok()
                    .zip(code.and_then(FortuneCookieError::from_repr));
                if let Some((instruction, error)) = decoded {
                    return Self::FortuneCookie { instruction, error };
                }
            }
        }

        Self::Solana {
            instruction_tag,
            error,
        }
    }

    pub fn is_message_board_error(&self, expected: MessageBoardError) -> bool {
        matches!(self, Self::MessageBoard { error, .. } if *error == expected)
    }
}

pub struct PrettyInstructionError(pub InstructionError);

impl PrettyInstructionError {
    pub fn new(error: &ClientError, instructions: &[Instruction]) -> Option<Self> {
        let transaction_error: TransactionError = match error.kind() {
            ClientErrorKind::RpcError(RpcResponseError {
                data:
                    RpcResponseErrorData::SendTransactionPreflightFailure(
                        RpcSimulateTransactionResult {
                            err: Some(ui_err), ..
                        },
                    ),
                ..
            }) => ui_err.clone().into(),
            ClientErrorKind::TransactionError(transaction_error) => transaction_error.clone(),
            _ => return None,
        };

        match transaction_error {
            TransactionError::InstructionError(instruction_index, instruction_error) => {
                let instruction = instructions.get(instruction_index as usize)?;
                Some(Self(InstructionError::from_instruction(
                    instruction,
                    instruction_error,
                )))
            }
            _ => None,
        }
    }
}

impl Display for PrettyInstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (error_type, instruction, error) = match &self.0 {
            InstructionError::Solana {
                instruction_tag,
                error,
            } => (
                "SolanaInstructionError",
                instruction_tag.map_or("<no data>".to_string(), |tag| tag.to_string()),
                error.to_string(),
            ),
            InstructionError::MessageBoard { instruction, error } => (
                "MessageBoardError",
                instruction.to_string(),
                error.to_string(),
            ),
            InstructionError::FortuneCookie { instruction, error } => (
                "FortuneCookieError",
                instruction.to_string(),
                error.to_string(),
            ),
        };

        let message = format!("({instruction}, {error})");
        let error_message = fmt_kv!(error_type, message, LogColor::Error);
        writeln!(f, "{error_message}")
    }
}
