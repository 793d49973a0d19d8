#[macro_export]
macro_rules! user_fortune_signer {
    ( $user:expr, $bump:expr ) => {
        solana_instruction_view::cpi::Signer::from(&[
            solana_instruction_view::cpi::Seed::from(
                tollgate_interface::fortune_cookie::seeds::FORTUNE_SEED,
            ),
            solana_instruction_view::cpi::Seed::from(AsRef::<[u8]>::as_ref($user)),
            solana_instruction_view::cpi::Seed::from(&[$bump]),
        ])
    };
}

/// # Example
///
/// ```ignore
/// let counter_le = counter.to_le_bytes();
/// let signer: Signer = request_fortune_signer!(user, counter_le, bump);
/// ```
#[macro_export]
macro_rules! request_fortune_signer {
    ( $user:expr, $counter_le:expr, $bump:expr ) => {
        solana_instruction_view::cpi::Signer::from(&[
            solana_instruction_view::cpi::Seed::from(
                tollgate_interface::fortune_cookie::seeds::FORTUNE_SEED,
            ),
            solana_instruction_view::cpi::Seed::from(AsRef::<[u8]>::as_ref($user)),
            solana_instruction_view::cpi::Seed::from(&$counter_le),
            solana_instruction_view::cpi::Seed::from(&[$bump]),
        ])
    };
}
