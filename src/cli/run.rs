//! Dispatch to the command handler for the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary
//! - `Err` on the first failure (config, tool, or filesystem error)

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, build::build, build_po::build_po, info::info, init::init, install::install,
    },
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::BuildPo(cmd)) => build_po(cmd),
        Some(Command::Install(cmd)) => install(cmd),
        Some(Command::Init) => init(),
        Some(Command::Info(cmd)) => info(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
