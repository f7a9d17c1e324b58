//! Command implementations for guardgen.
//!
//! Routes parsed CLI commands to their handlers. Handlers load the config,
//! resolve paths against the working directory and report through a [`Ui`].

mod init;
mod list;

use crate::cli::Command;
use crate::error::Result;
use crate::ui::Ui;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, ui: &dyn Ui) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args, ui),
        Command::List(args) => list::cmd_list(args, ui),
    }
}
