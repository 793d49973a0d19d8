//! See [`process_post_message`].

use pinocchio::{
    account::AccountView,
    sysvars::{
        clock::Clock,
        Sysvar,
    },
    ProgramResult,
};
use pinocchio_system::instructions::Transfer;
use tollgate_interface::message_board::{
    events::MessagePostedEvent,
    instructions::PostMessageInstructionData,
    state::{
        message::{
            Message,
            MESSAGE_SIZE,
        },
        message_counter::MessageCounter,
    },
    validate_content,
    POST_FEE_LAMPORTS,
};

use crate::{
    context::post_message_context::PostMessageContext,
    debug,
    events::emit_message_posted,
    message_signer,
    shared::create_pda::create_pda_account,
};

/// Charges the post fee, creates the message at the PDA for the current count and bumps the count.
///
/// Every account and the content are validated before the first CPI, and the runtime rolls back
/// the fee transfer if anything after it fails.
pub fn process_post_message(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let ctx = PostMessageContext::load(accounts)?;
    let data = PostMessageInstructionData::unpack_untagged(instruction_data)?;
    let content = validate_content(data.content)?;

    Transfer {
        from: ctx.payer.account,
        to: ctx.treasury.account,
        lamports: POST_FEE_LAMPORTS,
    }
    .invoke()?;

    let index = ctx.counter.count;
    let index_le = index.to_le_bytes();
    create_pda_account(
        ctx.payer.account,
        ctx.message.account,
        MESSAGE_SIZE,
        0,
        &[message_signer!(
            ctx.counter.account.address(),
            index_le,
            ctx.message.bump
        )],
    )?;

    let timestamp = Clock::get()?.unix_timestamp;
    {
        let mut message_data = ctx.message.account.try_borrow_mut()?;
        Message::write(
            &mut message_data,
            ctx.payer.account.address(),
            timestamp,
            index,
            ctx.message.bump,
            content.as_bytes(),
        )?;
    }

    {
        let mut counter_data = ctx.counter.account.try_borrow_mut()?;
        MessageCounter::load_checked_mut(&mut counter_data)?.increment_count()?;
    }

    emit_message_posted(&MessagePostedEvent::new(
        *ctx.payer.account.address(),
        *ctx.message.account.address(),
        timestamp,
        index,
    ));

    debug!("Message {} posted", index);
    Ok(())
}
