//! See [`create_pda_account`].

use pinocchio::{
    account::AccountView,
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    ProgramResult,
};
use pinocchio_system::instructions::{
    Allocate,
    Assign,
    CreateAccount,
    Transfer,
};
use solana_instruction_view::cpi::Signer;

/// Creates a program-owned PDA of `space` bytes holding the rent-exempt minimum plus `deposit`.
///
/// `CreateAccount` rejects an address that already holds lamports, and anyone can send lamports
/// to a PDA. A pre-funded PDA is instead topped up by `payer` and then allocated and assigned with
/// its own signature. The payer always sends at least `deposit`.
pub fn create_pda_account(
    payer: &AccountView,
    account: &AccountView,
    space: usize,
    deposit: u64,
    signers: &[Signer],
) -> ProgramResult {
    let required = Rent::get()?
        .try_minimum_balance(space)?
        .saturating_add(deposit);
    let current = account.lamports();

    if current == 0 {
        return CreateAccount {
            from: payer,
            to: account,
            lamports: required,
            space: space as u64,
            owner: &crate::ID,
        }
        .invoke_signed(signers);
    }

    let top_up = required.saturating_sub(current).max(deposit);
    if top_up > 0 {
        Transfer {
            from: payer,
            to: account,
            lamports: top_up,
        }
        .invoke()?;
    }
    Allocate {
        account,
        space: space as u64,
    }
    .invoke_signed(signers)?;
    Assign {
        account,
        owner: &crate::ID,
    }
    .invoke_signed(signers)
}
