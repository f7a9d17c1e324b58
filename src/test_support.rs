use crate::error::{GuardgenError, Result};
use crate::plugin::Plugin;
use crate::ui::Ui;
use std::cell::RefCell;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Sets or clears an environment variable, restoring it on drop.
/// Callers must be `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let original = std::env::var_os(key);
        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        let original = std::env::var_os(key);
        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::set.
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Captures UI messages for assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingUi {
    infos: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingUi {
    pub(crate) fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Ui for RecordingUi {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// A plugin that records each registration call instead of touching files.
/// Shares its call log so tests keep a handle after handing the plugin to a
/// registry.
pub(crate) struct CountingPlugin {
    name: String,
    calls: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl CountingPlugin {
    pub(crate) fn new(name: &str, calls: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            calls: Rc::clone(calls),
            fail: false,
        }
    }

    pub(crate) fn failing(name: &str, calls: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            fail: true,
            ..Self::new(name, calls)
        }
    }
}

impl Plugin for CountingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn template(&self) -> &str {
        ""
    }

    fn add_to_guardfile(&self, _guardfile: &Path, _ui: &dyn Ui) -> Result<()> {
        self.calls.borrow_mut().push(self.name.clone());
        if self.fail {
            return Err(GuardgenError::Io(format!(
                "{} failed to register",
                self.name
            )));
        }
        Ok(())
    }
}
