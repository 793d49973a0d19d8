//! Mollusk harness for running the compiled programs against an in-memory account store.

mod checks;
mod helper_trait;
mod utils;

use std::{
    collections::HashMap,
    path::PathBuf,
};

pub use checks::*;
pub use helper_trait::*;
use mollusk_svm::{
    Mollusk,
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;
use tollgate_interface::{
    fortune_cookie,
    message_board,
};
pub use utils::*;

/// The unix timestamp every mollusk context starts its clock at.
pub const DEFAULT_UNIX_TIMESTAMP: i64 = 1_700_000_000;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `message_board.so` would return the absolute path
/// version of `../target/deploy/message_board`, which is exactly what [`Mollusk::new`] expects.
fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_WORKSPACE_DIR"))
        .join("target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

fn new_mollusk_context(
    mut mollusk: Mollusk,
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    mollusk.sysvars.clock.unix_timestamp = DEFAULT_UNIX_TIMESTAMP;

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    // Create each account passed in at its respective address using the specified account data.
    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}

/// Creates and returns a [`MolluskContext`] with the message board program loaded and the
/// accounts passed created.
pub fn new_message_board_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mollusk = Mollusk::new(
        &message_board::program::ID,
        &deploy_file_to_program_name("message_board.so"),
    );
    new_mollusk_context(mollusk, accounts)
}

/// Creates and returns a [`MolluskContext`] with the fortune cookie program loaded and the
/// accounts passed created.
pub fn new_fortune_cookie_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mollusk = Mollusk::new(
        &fortune_cookie::program::ID,
        &deploy_file_to_program_name("fortune_cookie.so"),
    );
    new_mollusk_context(mollusk, accounts)
}
