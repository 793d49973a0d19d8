pub mod initialize;
pub mod post_message;

pub use initialize::*;
pub use post_message::*;
