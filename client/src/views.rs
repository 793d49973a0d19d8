//! Owned, decoded views of each program's accounts.
//!
//! Every view is built from an account's owner and raw data. The owner, length and discriminant
//! are all checked before any field is read.

use anyhow::{
    anyhow,
    bail,
};
use itertools::Itertools;
use solana_account::Account;
use solana_address::Address;
use tollgate_interface::{
    fortune_cookie::{
        self,
        selection::FortuneSelection,
        state::fortune_data::FortuneData,
    },
    message_board::{
        self,
        state::{
            message::Message,
            message_counter::MessageCounter,
        },
    },
};

fn check_owner(owner: &Address, program_id: &Address, kind: &str) -> anyhow::Result<()> {
    if owner != program_id {
        bail!("{kind} account is owned by {owner}, expected {program_id}");
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageCounterView {
    pub address: Address,
    pub count: u64,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl MessageCounterView {
    pub fn try_from_owner_and_data(
        address: Address,
        owner: &Address,
        data: &[u8],
    ) -> anyhow::Result<Self> {
        check_owner(owner, &message_board::program::ID, "Counter")?;
        let counter = MessageCounter::load_checked(data)
            .map_err(|e| anyhow!("Invalid counter account {address}: {e}"))?;
        Ok(Self {
            address,
            count: counter.count(),
            bump: counter.bump,
            treasury_bump: counter.treasury_bump,
        })
    }

    pub fn try_from_account(address: Address, account: &Account) -> anyhow::Result<Self> {
        Self::try_from_owner_and_data(address, &account.owner, &account.data)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
    pub address: Address,
    pub poster: Address,
    pub timestamp: i64,
    pub index: u64,
    pub bump: u8,
    pub content: String,
}

impl MessageView {
    pub fn try_from_owner_and_data(
        address: Address,
        owner: &Address,
        data: &[u8],
    ) -> anyhow::Result<Self> {
        check_owner(owner, &message_board::program::ID, "Message")?;
        let message = Message::load_checked(data)
            .map_err(|e| anyhow!("Invalid message account {address}: {e}"))?;
        let content = message
            .content_str()
            .map_err(|e| anyhow!("Invalid message content at {address}: {e}"))?;
        Ok(Self {
            address,
            poster: message.poster,
            timestamp: message.timestamp(),
            index: message.index(),
            bump: message.bump,
            content: content.to_string(),
        })
    }

    pub fn try_from_account(address: Address, account: &Account) -> anyhow::Result<Self> {
        Self::try_from_owner_and_data(address, &account.owner, &account.data)
    }
}

/// Orders messages newest first by timestamp. Posts that share a timestamp are ordered by
/// descending index.
pub fn newest_first(messages: impl IntoIterator<Item = MessageView>) -> Vec<MessageView> {
    messages
        .into_iter()
        .sorted_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.index.cmp(&a.index))
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FortuneView {
    pub address: Address,
    pub user: Address,
    pub counter: u64,
    pub bump: u8,
    pub selection: FortuneSelection,
    pub fortune_index: u8,
    pub fortune: String,
}

impl FortuneView {
    pub fn try_from_owner_and_data(
        address: Address,
        owner: &Address,
        data: &[u8],
    ) -> anyhow::Result<Self> {
        check_owner(owner, &fortune_cookie::program::ID, "Fortune")?;
        let fortune = FortuneData::load_checked(data)
            .map_err(|e| anyhow!("Invalid fortune account {address}: {e}"))?;
        let selection = fortune
            .selection()
            .map_err(|e| anyhow!("Invalid fortune account {address}: {e}"))?;
        let text = fortune
            .fortune_str()
            .ok_or_else(|| anyhow!("Fortune text at {address} isn't UTF-8"))?;
        Ok(Self {
            address,
            user: fortune.user,
            counter: fortune.counter(),
            bump: fortune.bump,
            selection,
            fortune_index: fortune.fortune_index,
            fortune: text.to_string(),
        })
    }

    pub fn try_from_account(address: Address, account: &Account) -> anyhow::Result<Self> {
        Self::try_from_owner_and_data(address, &account.owner, &account.data)
    }
}

#[cfg(test)]
mod tests {
    use tollgate_interface::{
        fortune_cookie::{
            fortunes::FORTUNES,
            state::fortune_data::FORTUNE_DATA_SIZE,
        },
        message_board::state::message::MESSAGE_SIZE,
    };

    use super::*;

    fn message(index: u64, timestamp: i64) -> MessageView {
        MessageView {
            address: Address::new_unique(),
            poster: Address::new_unique(),
            timestamp,
            index,
            bump: 255,
            content: format!("post {index}"),
        }
    }

    #[test]
    fn newest_first_breaks_ties_by_index() {
        let sorted = newest_first([message(0, 10), message(1, 30), message(2, 30), message(3, 20)]);
        let indices = sorted.iter().map(|m| m.index).collect_vec();
        assert_eq!(indices, [2, 1, 3, 0]);
    }

    #[test]
    fn counter_view_checks_owner_and_discriminant() {
        let address = Address::new_unique();
        let data = MessageCounter::new(5, 254, 253).as_bytes().to_vec();

        let view =
            MessageCounterView::try_from_owner_and_data(address, &message_board::program::ID, &data)
                .unwrap();
        assert_eq!(view.count, 5);
        assert_eq!(view.bump, 254);
        assert_eq!(view.treasury_bump, 253);

        let wrong_owner = Address::new_unique();
        assert!(MessageCounterView::try_from_owner_and_data(address, &wrong_owner, &data).is_err());

        let mut bad_disc = data.clone();
        bad_disc[0] ^= 1;
        assert!(MessageCounterView::try_from_owner_and_data(
            address,
            &message_board::program::ID,
            &bad_disc
        )
        .is_err());

        assert!(MessageCounterView::try_from_owner_and_data(
            address,
            &message_board::program::ID,
            &data[..10]
        )
        .is_err());
    }

    #[test]
    fn message_view_decodes_fields() {
        let address = Address::new_unique();
        let poster = Address::new_unique();
        let mut data = vec![0; MESSAGE_SIZE];
        Message::write(&mut data, &poster, 1_700_000_000, 7, 250, b"hello board").unwrap();

        let view =
            MessageView::try_from_owner_and_data(address, &message_board::program::ID, &data)
                .unwrap();
        assert_eq!(view.poster, poster);
        assert_eq!(view.timestamp, 1_700_000_000);
        assert_eq!(view.index, 7);
        assert_eq!(view.content, "hello board");

        // A fortune account is never a message.
        assert!(MessageView::try_from_owner_and_data(address, &fortune_cookie::program::ID, &data)
            .is_err());
    }

    #[test]
    fn fortune_view_decodes_fields() {
        let address = Address::new_unique();
        let user = Address::new_unique();
        let mut data = vec![0; FORTUNE_DATA_SIZE];
        let text =
            FortuneData::write(&mut data, &user, 3, 252, FortuneSelection::UserKeyAndCounter)
                .unwrap();

        let view =
            FortuneView::try_from_owner_and_data(address, &fortune_cookie::program::ID, &data)
                .unwrap();
        assert_eq!(view.user, user);
        assert_eq!(view.counter, 3);
        assert_eq!(view.selection, FortuneSelection::UserKeyAndCounter);
        assert_eq!(view.fortune, text);
        assert_eq!(FORTUNES[view.fortune_index as usize], text);

        assert!(
            FortuneView::try_from_owner_and_data(address, &message_board::program::ID, &data)
                .is_err()
        );
    }
}
