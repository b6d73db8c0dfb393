//! Integration tests for component generation, the generator session and the CLI

mod cli_commands;
mod test_utils;

pub use test_utils::{compgen_command, with_isolated_home};
