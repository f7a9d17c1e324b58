//! guardgen: Guardfile generator.
//!
//! This is the main entry point for the `guardgen` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;
pub mod guardfile;
mod logging;
pub mod plugin;
pub mod ui;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use ui::{ConsoleUi, Ui};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command, &ConsoleUi) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            ConsoleUi.error(&err.to_string());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
