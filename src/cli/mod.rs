//! Command line interface

pub mod args;
pub mod commands;

pub use args::{parse_args, Cli, Operation, Parsed};
pub use commands::{dispatch, CommandContext};
