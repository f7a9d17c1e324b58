//! Atomic file writes.
//!
//! Content is written to a sibling temporary file (`.{filename}.tmp`), synced,
//! and then renamed over the target. A crash can leave the temporary file
//! behind but never a partially written target.
//!
//! A target that is a symlink is written through: the link is resolved first
//! and the real file is replaced, so the link itself survives.

use crate::error::{GuardgenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let target = resolve_symlink(path.as_ref())?;
    let path = target.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            GuardgenError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "atomic write complete");
    Ok(())
}

/// The file a write to `path` should land in: `path` itself, or the file a
/// symlink at `path` points to (which may not exist yet).
fn resolve_symlink(path: &Path) -> Result<PathBuf> {
    let is_link = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(path.to_path_buf());
    }

    if let Ok(real) = fs::canonicalize(path) {
        tracing::debug!(link = %path.display(), target = %real.display(), "writing through symlink");
        return Ok(real);
    }

    // Dangling link: follow one level so the write creates the link's target.
    let link = fs::read_link(path).map_err(|e| {
        GuardgenError::Io(format!(
            "failed to resolve symlink '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(match path.parent() {
        Some(parent) if link.is_relative() => parent.join(link),
        _ => link,
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GuardgenError::Io(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        GuardgenError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        GuardgenError::Io(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        GuardgenError::Io(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Rename `source` over `target`. On Windows a plain rename fails when the
/// target exists, so the target is removed first.
fn replace(source: &Path, target: &Path) -> Result<()> {
    #[cfg(windows)]
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            GuardgenError::Io(format!(
                "failed to replace '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        GuardgenError::Io(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })
}
