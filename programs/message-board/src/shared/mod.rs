pub mod create_pda;
pub mod pda;
pub mod seeds;
