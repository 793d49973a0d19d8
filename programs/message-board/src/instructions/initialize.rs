//! See [`process_initialize`].

use pinocchio::{
    account::AccountView,
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    ProgramResult,
};
use pinocchio_system::instructions::Transfer;
use tollgate_interface::{
    error::MessageBoardError,
    message_board::state::message_counter::{
        MessageCounter,
        MESSAGE_COUNTER_SIZE,
    },
};

use crate::{
    context::initialize_context::InitializeContext,
    counter_signer,
    debug,
    shared::create_pda::create_pda_account,
};

/// Creates the counter PDA with a zero count and makes sure the treasury can receive fees.
///
/// Fails with [`MessageBoardError::AlreadyInitialized`] if the counter already exists.
pub fn process_initialize(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    if !instruction_data.is_empty() {
        return Err(MessageBoardError::InvalidInstructionData.into());
    }

    let ctx = InitializeContext::load(accounts)?;
    let rent = Rent::get()?;

    create_pda_account(
        ctx.payer.account,
        ctx.counter.account,
        MESSAGE_COUNTER_SIZE,
        0,
        &[counter_signer!(ctx.counter.bump)],
    )?;

    // A system account can't hold a nonzero balance below the rent-exempt minimum, so the first
    // fee credit would fail on a fresh treasury.
    let shortfall = rent
        .try_minimum_balance(0)?
        .saturating_sub(ctx.treasury.account.lamports());
    if shortfall > 0 {
        Transfer {
            from: ctx.payer.account,
            to: ctx.treasury.account,
            lamports: shortfall,
        }
        .invoke()?;
        debug!("Treasury topped up by {} lamports", shortfall);
    }

    let mut data = ctx.counter.account.try_borrow_mut()?;
    data.copy_from_slice(MessageCounter::new(0, ctx.counter.bump, ctx.treasury.bump).as_bytes());

    debug!("Message board initialized");
    Ok(())
}
