/// # Example
///
/// ```ignore
/// let signer: Signer = counter_signer!(bump);
/// ```
#[macro_export]
macro_rules! counter_signer {
    ( $bump:expr ) => {
        solana_instruction_view::cpi::Signer::from(&[
            solana_instruction_view::cpi::Seed::from(
                tollgate_interface::message_board::seeds::COUNTER_SEED,
            ),
            solana_instruction_view::cpi::Seed::from(&[$bump]),
        ])
    };
}

/// # Example
///
/// ```ignore
/// let index_le = index.to_le_bytes();
/// let signer: Signer = message_signer!(counter_address, index_le, bump);
/// ```
#[macro_export]
macro_rules! message_signer {
    ( $counter:expr, $index_le:expr, $bump:expr ) => {
        solana_instruction_view::cpi::Signer::from(&[
            solana_instruction_view::cpi::Seed::from(
                tollgate_interface::message_board::seeds::MESSAGE_SEED,
            ),
            solana_instruction_view::cpi::Seed::from(AsRef::<[u8]>::as_ref($counter)),
            solana_instruction_view::cpi::Seed::from(&$index_le),
            solana_instruction_view::cpi::Seed::from(&[$bump]),
        ])
    };
}
