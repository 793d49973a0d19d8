use solana_account::Account;
use solana_address::Address;
use tollgate_interface::SYSTEM_PROGRAM_ID;

/// A system-owned account holding `lamports`, ready to sign and pay.
pub fn create_mock_user_account(address: Address, lamports: u64) -> (Address, Account) {
    (
        address,
        Account {
            data: Default::default(),
            lamports,
            owner: SYSTEM_PROGRAM_ID,
            executable: false,
            rent_epoch: 0,
        },
    )
}
