use pinocchio::Address;
use tollgate_interface::fortune_cookie::{
    seeds::FORTUNE_SEED,
    selection::FortuneSelection,
};

/// The fortune PDA for `user`. `counter` is only part of the seeds for
/// [`FortuneSelection::UserKeyAndCounter`].
#[inline(always)]
pub fn fortune_address(user: &Address, selection: FortuneSelection, counter: u64) -> (Address, u8) {
    match selection {
        FortuneSelection::UserKey => {
            Address::find_program_address(&[FORTUNE_SEED, user.as_ref()], &crate::ID)
        }
        FortuneSelection::UserKeyAndCounter => Address::find_program_address(
            &[FORTUNE_SEED, user.as_ref(), &counter.to_le_bytes()],
            &crate::ID,
        ),
    }
}
