pub mod signer_view;
pub mod system_program;

#[cfg(test)]
pub(crate) mod mock;
