//! Client-side utilities for the message board and fortune cookie programs.
//!
//! Includes instruction contexts, account views, PDA derivations, an RPC wrapper and mollusk
//! test helpers.

pub mod context;
pub mod logs;
pub mod mollusk_helpers;
pub mod pda;
pub mod pretty;
pub mod transactions;
pub mod views;

pub use logs::LogColor;
