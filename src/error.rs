//! Error types for the guardgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for guardgen operations.
#[derive(Error, Debug)]
pub enum GuardgenError {
    /// The Guardfile is already present and the caller asked to abort on existence.
    #[error("Guardfile already exists at {}", .0.display())]
    GuardfileExists(PathBuf),

    /// Neither a registered plugin nor a user template matched the name.
    #[error(
        "Could not load 'guard/{}' or '~/.guard/templates/{}' or find class Guard::{}",
        .name.to_lowercase(),
        .name.to_lowercase(),
        plugin_const_name(.name)
    )]
    PluginNotFound { name: String },

    /// Filesystem read or write failed.
    #[error("{0}")]
    Io(String),

    /// Configuration file could not be read or is invalid.
    #[error("{0}")]
    Config(String),

    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),
}

impl GuardgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GuardgenError::GuardfileExists(_) => exit_codes::GUARDFILE_EXISTS,
            GuardgenError::PluginNotFound { .. } => exit_codes::USER_ERROR,
            GuardgenError::Io(_) => exit_codes::IO_FAILURE,
            GuardgenError::Config(_) => exit_codes::USER_ERROR,
            GuardgenError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Class-style name the host tool derives from a plugin name:
/// lowercased, dashes dropped, first letter capitalized.
pub fn plugin_const_name(name: &str) -> String {
    let flat: String = name.to_lowercase().chars().filter(|c| *c != '-').collect();
    let mut chars = flat.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result type alias for guardgen operations.
pub type Result<T> = std::result::Result<T, GuardgenError>;
