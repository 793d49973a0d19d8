#[cfg(test)]
mod tests {
    use solana_address::Address;
    use tollgate_interface::{
        fortune_cookie::{
            fortunes::FORTUNES,
            selection::FortuneSelection,
            state::fortune_data::{
                FortuneData,
                FORTUNE_DATA_SIZE,
            },
        },
        message_board::{
            state::message::{
                Message,
                MESSAGE_SIZE,
            },
            validate_content,
        },
    };

    #[test]
    fn message_bytes_at_fixed_offsets() {
        let poster = Address::new_from_array([7; 32]);
        let content = validate_content(b"gm 69").unwrap();
        let mut bytes = [0u8; MESSAGE_SIZE];
        Message::write(&mut bytes, &poster, -5, 0, 254, content.as_bytes()).unwrap();

        assert_eq!(&bytes[..8], b"message\0");
        assert_eq!(&bytes[8..40], &[7; 32]);
        assert_eq!(&bytes[40..48], &(-5i64).to_le_bytes());
        assert_eq!(&bytes[48..56], &[0; 8]);
        assert_eq!(bytes[56], 254);
        assert_eq!(bytes[57], 5);
        assert_eq!(&bytes[58..63], b"gm 69");
        assert!(bytes[63..].iter().all(|b| *b == 0));
    }

    #[test]
    fn every_fortune_round_trips_through_the_account() {
        // Vary the first key byte so the per-user selection visits every entry.
        for first in 0..FORTUNES.len() as u8 {
            let mut key = [0x42; 32];
            key[0] = first;
            let user = Address::new_from_array(key);

            let mut bytes = [0u8; FORTUNE_DATA_SIZE];
            let written =
                FortuneData::write(&mut bytes, &user, 0, 255, FortuneSelection::UserKey).unwrap();
            let data = FortuneData::load_checked(&bytes).unwrap();

            assert_eq!(written, FORTUNES[first as usize]);
            assert_eq!(data.fortune_str(), Some(written));
            assert_eq!(data.fortune_index, first);
        }
    }
}
