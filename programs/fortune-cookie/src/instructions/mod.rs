pub mod get_fortune;

pub use get_fortune::*;
