//! CLI argument parsing for guardgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// guardgen: scaffold a Guardfile and add plugin templates to it.
#[derive(Parser, Debug)]
#[command(name = "guardgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for guardgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a Guardfile and add plugin templates to it.
    ///
    /// Writes the default Guardfile if none exists, then adds the named
    /// plugins, or every installed plugin when none are named.
    Init(InitArgs),

    /// List installed plugins and user templates.
    List(ListArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Plugins to add to the Guardfile. Defaults to all installed plugins.
    pub plugins: Vec<String>,

    /// Only create the Guardfile; do not add any plugin templates.
    #[arg(short, long)]
    pub bare: bool,

    /// Fail if the Guardfile already exists.
    #[arg(long)]
    pub abort_on_existence: bool,

    /// Path to the Guardfile (default: ./Guardfile).
    #[arg(short = 'G', long)]
    pub guardfile: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to the Guardfile used to mark plugins already added.
    #[arg(short = 'G', long)]
    pub guardfile: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::try_parse_from(["guardgen", "init"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert!(args.plugins.is_empty());
            assert!(!args.bare);
            assert!(!args.abort_on_existence);
            assert!(args.guardfile.is_none());
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_init_full() {
        let cli = Cli::try_parse_from([
            "guardgen",
            "init",
            "rspec",
            "shell",
            "--bare",
            "--abort-on-existence",
            "-G",
            "config/Guardfile",
        ])
        .unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.plugins, vec!["rspec", "shell"]);
            assert!(args.bare);
            assert!(args.abort_on_existence);
            assert_eq!(args.guardfile, Some(PathBuf::from("config/Guardfile")));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["guardgen", "list", "--guardfile", "Guardfile.dev"]).unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.guardfile, Some(PathBuf::from("Guardfile.dev")));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["guardgen", "start"]).is_err());
    }
}
