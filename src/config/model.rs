//! Config struct definition and defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Guardfile name, resolved against the working directory.
pub const DEFAULT_GUARDFILE_NAME: &str = "Guardfile";

/// Config file name inside `~/.guard/`.
pub const DEFAULT_CONFIG_FILE: &str = "guardgen.yaml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "GUARDGEN_CONFIG";

/// Configuration loaded from `guardgen.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File name of the Guardfile inside the working directory.
    #[serde(default = "default_guardfile_name")]
    pub guardfile_name: String,

    /// Directory holding user templates (default: `~/.guard/templates`).
    #[serde(default)]
    pub home_templates_dir: Option<PathBuf>,

    /// Template copied when creating a new Guardfile. The embedded template is
    /// used when unset.
    #[serde(default)]
    pub guardfile_template: Option<PathBuf>,

    /// Abort instead of silently skipping when the Guardfile already exists.
    #[serde(default)]
    pub abort_on_existence: bool,
}

fn default_guardfile_name() -> String {
    DEFAULT_GUARDFILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guardfile_name: default_guardfile_name(),
            home_templates_dir: None,
            guardfile_template: None,
            abort_on_existence: false,
        }
    }
}

/// Options controlling a single generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Fail with [`crate::error::GuardgenError::GuardfileExists`] when the
    /// Guardfile is already present.
    pub abort_on_existence: bool,
}
