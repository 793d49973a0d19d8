//! Runtime account mocks laid out the way the loader serializes them: the account header
//! immediately followed by its data.

use pinocchio::{
    account::AccountView,
    Address,
};
use solana_account_view::RuntimeAccount;
use tollgate_interface::SYSTEM_PROGRAM_ID;

#[repr(C)]
pub(crate) struct MockAccount<const N: usize> {
    runtime: RuntimeAccount,
    data: [u8; N],
}

impl<const N: usize> MockAccount<N> {
    pub(crate) fn new(address: Address, owner: Address, data: [u8; N]) -> Self {
        Self {
            runtime: RuntimeAccount {
                // Not borrowed.
                borrow_state: u8::MAX,
                is_signer: 0,
                is_writable: 1,
                executable: 0,
                resize_delta: 0,
                address,
                owner,
                lamports: 1_000_000_000,
                data_len: N as _,
            },
            data,
        }
    }

    pub(crate) fn set_address(&mut self, address: Address) {
        self.runtime.address = address;
    }

    pub(crate) fn signer(mut self) -> Self {
        self.runtime.is_signer = 1;
        self
    }

    pub(crate) fn view(&mut self) -> AccountView {
        // Safety: `self` outlives every view in the tests and the data follows the header.
        unsafe { AccountView::new_unchecked(&mut self.runtime as *mut RuntimeAccount) }
    }
}

/// A system-owned account with no data.
pub(crate) fn empty(address: Address) -> MockAccount<0> {
    MockAccount::new(address, SYSTEM_PROGRAM_ID, [])
}

pub(crate) fn system_program() -> MockAccount<0> {
    MockAccount::new(SYSTEM_PROGRAM_ID, Address::new_from_array([0xff; 32]), [])
}
