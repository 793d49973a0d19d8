pub mod counter_account_view;
pub mod pda_account_view;
pub mod signer_view;
pub mod system_program;

#[cfg(test)]
pub(crate) mod mock;
