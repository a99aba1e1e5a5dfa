//! Command-line interface layer.

pub mod args;
pub mod commands;
mod exit_status;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use anyhow::Result;

pub fn run_cli(args: Arguments) -> Result<()> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(());
    };

    match args.command {
        Some(Command::Scan(cmd)) => commands::scan::scan(cmd),
        Some(Command::Apply(cmd)) => commands::apply::apply(cmd),
        Some(Command::Init) => commands::init::init(),
        // with_command_or_help already handled the no-command case.
        None => Ok(()),
    }
}
