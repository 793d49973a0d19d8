//! See [`process_get_fortune`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use solana_instruction_view::cpi::Signer;
use tollgate_interface::fortune_cookie::{
    selection::FortuneSelection,
    state::fortune_data::{
        FortuneData,
        FORTUNE_DATA_SIZE,
    },
    FORTUNE_FEE_LAMPORTS,
};

use crate::{
    context::get_fortune_context::GetFortuneContext,
    debug,
    request_fortune_signer,
    shared::create_pda::create_pda_account,
    user_fortune_signer,
};

/// Creates the fortune PDA funded with rent plus the fee and stores the selected fortune in it.
///
/// If the user can't cover rent plus the fee, the system program's insufficient funds error is
/// returned from the create step. A pre-funded fortune address still receives the full fee.
pub fn process_get_fortune(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let ctx = GetFortuneContext::load(accounts, instruction_data)?;

    let user = ctx.user.account.address();
    let counter_le = ctx.counter.to_le_bytes();
    match ctx.selection {
        FortuneSelection::UserKey => {
            create_fortune_account(&ctx, user_fortune_signer!(user, ctx.bump))?
        }
        FortuneSelection::UserKeyAndCounter => {
            create_fortune_account(&ctx, request_fortune_signer!(user, counter_le, ctx.bump))?
        }
    }

    let mut data = ctx.fortune_data.try_borrow_mut()?;
    FortuneData::write(&mut data, user, ctx.counter, ctx.bump, ctx.selection)?;

    debug!("Fortune #{} delivered", ctx.counter);
    Ok(())
}

#[inline(always)]
fn create_fortune_account(ctx: &GetFortuneContext, signer: Signer) -> ProgramResult {
    create_pda_account(
        ctx.user.account,
        ctx.fortune_data,
        FORTUNE_DATA_SIZE,
        FORTUNE_FEE_LAMPORTS,
        &[signer],
    )
}
