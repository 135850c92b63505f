//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and problem count
//! - `Err` if the command aborts (e.g., config not found, malformed locales)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, families::families, init::init, sync::sync},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Families(cmd)) => families(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
