pub mod initialize_context;
pub mod post_message_context;
