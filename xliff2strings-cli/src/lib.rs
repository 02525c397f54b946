//! CLI library for testing purposes

pub mod convert;
pub mod exit_code;

pub use convert::run_convert_command;
pub use exit_code::exit_code_for;
