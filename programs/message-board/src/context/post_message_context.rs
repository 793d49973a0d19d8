//! See [`PostMessageContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
    Address,
};
use tollgate_interface::{
    error::MessageBoardError,
    message_board::state::message::Message,
};

use crate::{
    shared::pda,
    validation::{
        counter_account_view::CounterAccountView,
        pda_account_view::PdaAccountView,
        signer_view::SignerView,
        system_program::verify_system_program,
    },
};

/// The account context for the `PostMessage` instruction.
///
/// The message address is derived from the counter's count at load time, so a client that read a
/// stale count is rejected here rather than at account creation.
#[derive(Clone)]
pub struct PostMessageContext<'a> {
    pub treasury: PdaAccountView<'a>,
    pub message: PdaAccountView<'a>,
    pub counter: CounterAccountView<'a>,
    pub payer: SignerView<'a>,
}

impl<'a> PostMessageContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<PostMessageContext<'a>, ProgramError> {
        let [treasury, message, counter, payer, system_program, ..] = accounts else {
            return Err(MessageBoardError::NotEnoughAccountKeys.into());
        };

        let payer = SignerView::new(payer)?;
        let counter = CounterAccountView::new(counter)?;
        let treasury = PdaAccountView::new(
            treasury,
            (
                pda::treasury_address_with_bump(counter.treasury_bump),
                counter.treasury_bump,
            ),
            MessageBoardError::IncorrectTreasuryAccount,
        )?;

        // A client that lost a race with the same count targets a slot that is now taken.
        if is_posted_message(message, counter.account.address())? {
            return Err(MessageBoardError::MessageAlreadyExists.into());
        }
        let message = PdaAccountView::new(
            message,
            pda::message_address(counter.account.address(), counter.count),
            MessageBoardError::IncorrectMessageAccount,
        )?;
        verify_system_program(system_program)?;

        Ok(Self {
            treasury,
            message,
            counter,
            payer,
        })
    }
}

/// Whether `account` is a message this program already posted on the board at `counter`.
#[inline(always)]
fn is_posted_message(account: &AccountView, counter: &Address) -> Result<bool, ProgramError> {
    if account.data_len() == 0 || !account.owned_by(&crate::ID) {
        return Ok(false);
    }
    let data = account.try_borrow()?;
    let Ok(message) = Message::load_checked(&data) else {
        return Ok(false);
    };
    let expected = pda::message_address_with_bump(counter, message.index(), message.bump);
    Ok(account.address() == &expected)
}

#[cfg(test)]
mod tests {
    use pinocchio::{
        error::ProgramError,
        Address,
    };
    use tollgate_interface::{
        error::MessageBoardError,
        message_board::state::{
            message::{
                Message,
                MESSAGE_SIZE,
            },
            message_counter::{
                MessageCounter,
                MESSAGE_COUNTER_SIZE,
            },
        },
        SYSTEM_PROGRAM_ID,
    };

    use super::PostMessageContext;
    use crate::{
        shared::pda,
        validation::mock::{
            empty,
            system_program,
            MockAccount,
        },
    };

    fn counter_data(count: u64) -> [u8; MESSAGE_COUNTER_SIZE] {
        let (_, bump) = pda::counter_address();
        let (_, treasury_bump) = pda::treasury_address();
        let mut data = [0u8; MESSAGE_COUNTER_SIZE];
        data.copy_from_slice(MessageCounter::new(count, bump, treasury_bump).as_bytes());
        data
    }

    fn err(e: MessageBoardError) -> Option<ProgramError> {
        Some(e.into())
    }

    #[test]
    fn message_address_follows_the_count() {
        let (counter_address, counter_bump) = pda::counter_address();
        let (message_address, message_bump) = pda::message_address(&counter_address, 5);

        let mut treasury = empty(pda::treasury_address().0);
        let mut message = empty(message_address);
        let mut counter = MockAccount::new(counter_address, crate::ID, counter_data(5));
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();
        let accounts = [
            treasury.view(),
            message.view(),
            counter.view(),
            payer.view(),
            system.view(),
        ];

        let ctx = PostMessageContext::load(&accounts).unwrap();
        assert_eq!(ctx.counter.count, 5);
        assert_eq!(ctx.counter.bump, counter_bump);
        assert_eq!(ctx.message.bump, message_bump);
    }

    #[test]
    fn stale_count_is_rejected() {
        let (counter_address, _) = pda::counter_address();
        // The client read count 4, but a post landed in between.
        let (stale_address, _) = pda::message_address(&counter_address, 4);

        let mut treasury = empty(pda::treasury_address().0);
        let mut message = empty(stale_address);
        let mut counter = MockAccount::new(counter_address, crate::ID, counter_data(5));
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();
        let accounts = [
            treasury.view(),
            message.view(),
            counter.view(),
            payer.view(),
            system.view(),
        ];

        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::IncorrectMessageAccount)
        );
    }

    fn posted_message(counter: &Address, index: u64) -> MockAccount<MESSAGE_SIZE> {
        let (address, bump) = pda::message_address(counter, index);
        let mut data = [0u8; MESSAGE_SIZE];
        let poster = Address::new_from_array([2; 32]);
        Message::write(&mut data, &poster, 0, index, bump, b"gm").unwrap();
        MockAccount::new(address, crate::ID, data)
    }

    #[test]
    fn taken_slot_is_reported_as_existing() {
        let (counter_address, _) = pda::counter_address();

        let mut treasury = empty(pda::treasury_address().0);
        let mut message = posted_message(&counter_address, 4);
        let mut counter = MockAccount::new(counter_address, crate::ID, counter_data(5));
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();
        let accounts = [
            treasury.view(),
            message.view(),
            counter.view(),
            payer.view(),
            system.view(),
        ];

        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::MessageAlreadyExists)
        );
    }

    #[test]
    fn unrelated_account_with_data_is_the_wrong_message() {
        let (counter_address, _) = pda::counter_address();

        let mut treasury = empty(pda::treasury_address().0);
        let mut counter = MockAccount::new(counter_address, crate::ID, counter_data(5));
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();

        // Program-owned but not a message.
        let mut not_a_message =
            MockAccount::new(Address::new_from_array([4; 32]), crate::ID, [1u8; 16]);
        let accounts = [
            treasury.view(),
            not_a_message.view(),
            counter.view(),
            payer.view(),
            system.view(),
        ];
        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::IncorrectMessageAccount)
        );

        // A real message copied to an address it wasn't posted at.
        let mut moved = posted_message(&counter_address, 4);
        moved.set_address(Address::new_from_array([5; 32]));
        let accounts = [
            treasury.view(),
            moved.view(),
            counter.view(),
            payer.view(),
            system.view(),
        ];
        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::IncorrectMessageAccount)
        );
    }

    #[test]
    fn counter_address_uses_the_stored_bump() {
        let (counter_address, bump) = pda::counter_address();
        let (message_address, _) = pda::message_address(&counter_address, 0);
        let (_, treasury_bump) = pda::treasury_address();

        let mut data = [0u8; MESSAGE_COUNTER_SIZE];
        data.copy_from_slice(
            MessageCounter::new(0, bump.wrapping_sub(1), treasury_bump).as_bytes(),
        );

        let mut treasury = empty(pda::treasury_address().0);
        let mut message = empty(message_address);
        let mut counter = MockAccount::new(counter_address, crate::ID, data);
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();
        let accounts = [
            treasury.view(),
            message.view(),
            counter.view(),
            payer.view(),
            system.view(),
        ];

        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::IncorrectCounterAccount)
        );
    }

    #[test]
    fn counter_must_be_owned_and_tagged() {
        let (counter_address, _) = pda::counter_address();
        let (message_address, _) = pda::message_address(&counter_address, 0);

        let mut treasury = empty(pda::treasury_address().0);
        let mut message = empty(message_address);
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();

        let mut foreign = MockAccount::new(counter_address, SYSTEM_PROGRAM_ID, counter_data(0));
        let accounts = [
            treasury.view(),
            message.view(),
            foreign.view(),
            payer.view(),
            system.view(),
        ];
        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::InvalidCounterOwner)
        );

        let mut untagged =
            MockAccount::new(counter_address, crate::ID, [0u8; MESSAGE_COUNTER_SIZE]);
        let accounts = [
            treasury.view(),
            message.view(),
            untagged.view(),
            payer.view(),
            system.view(),
        ];
        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::InvalidAccountDiscriminant)
        );

        let mut impostor =
            MockAccount::new(Address::new_from_array([9; 32]), crate::ID, counter_data(0));
        let accounts = [
            treasury.view(),
            message.view(),
            impostor.view(),
            payer.view(),
            system.view(),
        ];
        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::IncorrectCounterAccount)
        );
    }

    #[test]
    fn treasury_must_be_canonical() {
        let (counter_address, _) = pda::counter_address();
        let (message_address, _) = pda::message_address(&counter_address, 0);

        let mut treasury = empty(Address::new_from_array([3; 32]));
        let mut message = empty(message_address);
        let mut counter = MockAccount::new(counter_address, crate::ID, counter_data(0));
        let mut payer = empty(Address::new_from_array([1; 32])).signer();
        let mut system = system_program();
        let accounts = [
            treasury.view(),
            message.view(),
            counter.view(),
            payer.view(),
            system.view(),
        ];

        assert_eq!(
            PostMessageContext::load(&accounts).err(),
            err(MessageBoardError::IncorrectTreasuryAccount)
        );
    }
}
