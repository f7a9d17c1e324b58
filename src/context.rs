//! Path resolution for guardgen.
//!
//! Resolves the Guardfile location and the user template directory once, so
//! the generator works purely on absolute paths and never consults the process
//! working directory itself.

use crate::config::Config;
use crate::error::{GuardgenError, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Directory under the user's home holding guard settings and templates.
pub const GUARD_HOME_DIR: &str = ".guard";

/// Templates directory name inside [`GUARD_HOME_DIR`].
pub const TEMPLATES_DIR: &str = "templates";

/// Resolved paths for a generator run. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorContext {
    /// Directory the Guardfile lives in (normally the working directory).
    pub working_dir: PathBuf,

    /// Absolute path to the Guardfile.
    pub guardfile: PathBuf,

    /// Directory searched for user templates (`~/.guard/templates`).
    pub home_templates_dir: PathBuf,

    /// Template file copied on creation; `None` means the embedded template.
    pub guardfile_template: Option<PathBuf>,
}

impl GeneratorContext {
    /// Resolve the context from the current working directory.
    pub fn resolve(config: &Config) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            GuardgenError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, config)
    }

    /// Resolve the context against a specific working directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P, config: &Config) -> Result<Self> {
        let working_dir = cwd.as_ref().to_path_buf();
        let guardfile = working_dir.join(&config.guardfile_name);

        let home_templates_dir = match &config.home_templates_dir {
            Some(dir) => expand_home(dir),
            None => guard_home_dir()
                .map(|home| home.join(TEMPLATES_DIR))
                .ok_or_else(|| {
                    GuardgenError::UserError(
                        "cannot locate the home directory; set HOME or configure home_templates_dir"
                            .to_string(),
                    )
                })?,
        };

        let guardfile_template = config.guardfile_template.as_deref().map(expand_home);

        tracing::debug!(
            guardfile = %guardfile.display(),
            templates = %home_templates_dir.display(),
            "resolved generator context"
        );

        Ok(Self {
            working_dir,
            guardfile,
            home_templates_dir,
            guardfile_template,
        })
    }

    /// Use an explicit Guardfile path (relative paths resolve against the working directory).
    pub fn with_guardfile<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = expand_home(path.as_ref());
        self.guardfile = if path.is_absolute() {
            path
        } else {
            self.working_dir.join(path)
        };
        self
    }

    /// Path of the user template for `name`, always inside the templates
    /// directory: root, drive, `.` and `..` components are dropped, so
    /// `"/bar"` maps to `<templates>/bar`.
    pub fn user_template_path(&self, name: &str) -> PathBuf {
        let relative: PathBuf = Path::new(name)
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .collect();
        self.home_templates_dir.join(relative)
    }
}

/// The user's home directory, from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `~/.guard`, if the home directory is known.
pub fn guard_home_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(GUARD_HOME_DIR))
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
