pub mod get_fortune_context;
