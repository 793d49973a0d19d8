//! Instruction builders for each program, holding the addresses they derive once up front.

pub mod fortune_cookie;
pub mod message_board;
