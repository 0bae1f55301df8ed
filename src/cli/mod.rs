//! Command-line interface layer.
//!
//! Parses arguments, runs one command, prints its report and maps the result
//! to an exit status. Nothing here is needed to use the core as a library.

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_code;
mod exit_status;
mod logging;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use logging::init_tracing;

use commands::{CommandResult, check::check, generate::generate, init::init};
use exit_code::exit_status_from_result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_tracing(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run(args)?;
    report::print(&result);

    Ok(exit_status_from_result(&result))
}

/// Dispatch to the command handler.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
