//! Filesystem utilities for guardgen.
//!
//! Guardfile rewrites go through an atomic write so an interrupted run never
//! leaves a truncated Guardfile behind.

pub mod atomic;

pub use atomic::atomic_write;

use crate::error::{GuardgenError, Result};
use std::path::Path;

/// Read a file's raw bytes, mapping failures to an I/O error naming the path.
///
/// Guardfiles and templates are concatenated as bytes, so content need not be
/// valid UTF-8.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| {
        GuardgenError::Io(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Like [`read_bytes`], but a missing file reads as empty.
pub fn read_bytes_if_exists<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(GuardgenError::Io(format!(
            "failed to read '{}': {}",
            path.display(),
            e
        ))),
    }
}
