use std::collections::HashMap;

use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;

use crate::{
    context::message_board::MessageBoardContext,
    views::{
        FortuneView,
        MessageCounterView,
        MessageView,
    },
};

pub trait TollgateTestHelper {
    fn lamports(&self, address: &Address) -> u64;

    fn view_counter(&self) -> MessageCounterView;

    fn view_message(&self, address: &Address) -> MessageView;

    fn view_fortune(&self, address: &Address) -> FortuneView;
}

impl TollgateTestHelper for MolluskContext<HashMap<Address, Account>> {
    /// Missing accounts read as zero lamports.
    fn lamports(&self, address: &Address) -> u64 {
        self.account_store
            .borrow()
            .get(address)
            .map_or(0, |acc| acc.lamports)
    }

    fn view_counter(&self) -> MessageCounterView {
        let counter = MessageBoardContext::new().counter;
        let account_store = self.account_store.borrow();

        let acc = account_store
            .get(&counter)
            .expect("Counter address should exist in mollusk account store");
        MessageCounterView::try_from_account(counter, acc)
            .expect("Account data isn't valid for a counter account")
    }

    fn view_message(&self, address: &Address) -> MessageView {
        let account_store = self.account_store.borrow();

        let acc = account_store
            .get(address)
            .unwrap_or_else(|| panic!("Message {address} should exist in mollusk account store"));
        MessageView::try_from_account(*address, acc)
            .expect("Account data isn't valid for a message account")
    }

    fn view_fortune(&self, address: &Address) -> FortuneView {
        let account_store = self.account_store.borrow();

        let acc = account_store
            .get(address)
            .unwrap_or_else(|| panic!("Fortune {address} should exist in mollusk account store"));
        FortuneView::try_from_account(*address, acc)
            .expect("Account data isn't valid for a fortune account")
    }
}
