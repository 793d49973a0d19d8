#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod context;
mod debug;
mod instructions;
mod shared;
mod validation;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

#[cfg(not(feature = "no-entrypoint"))]
pub use entrypoint::process_instruction;
pub use tollgate_interface::fortune_cookie::program::ID;
