//! Config loading and validation.

use super::model::{CONFIG_ENV_VAR, Config, DEFAULT_CONFIG_FILE, GeneratorOptions};
use crate::context::guard_home_dir;
use crate::error::{GuardgenError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GuardgenError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `$GUARDGEN_CONFIG`, else `~/.guard/guardgen.yaml`.
    ///
    /// A missing default file yields the defaults; a missing file named by the
    /// environment variable is an error.
    pub fn discover() -> Result<Self> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            tracing::debug!(path = %path.display(), "loading config from {}", CONFIG_ENV_VAR);
            return Self::load(path);
        }

        match guard_home_dir() {
            Some(dir) => {
                let path = dir.join(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "loading config");
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string. Empty input yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            GuardgenError::Config(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// `guardfile_name` must be a non-empty bare file name.
    pub fn validate(&self) -> Result<()> {
        let name = self.guardfile_name.trim();
        if name.is_empty() {
            return Err(GuardgenError::Config(
                "config validation failed: guardfile_name must be non-empty".to_string(),
            ));
        }

        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(GuardgenError::Config(format!(
                "config validation failed: guardfile_name must be a file name, not a path (found '{}')",
                self.guardfile_name
            )));
        }

        Ok(())
    }

    /// Generator options derived from this config.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            abort_on_existence: self.abort_on_existence,
        }
    }
}
