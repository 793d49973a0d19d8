pub mod instruction_error;
