//! Guardfile text helpers.
//!
//! The Guardfile is treated as opaque bytes: blocks are appended with a blank
//! line between them and plugin declarations are detected by pattern, not by
//! evaluating the DSL.

use crate::error::Result;
use crate::fs::{atomic_write, read_bytes};
use regex::Regex;
use std::path::Path;

/// The Guardfile written when none exists.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/Guardfile");

/// Join an existing Guardfile and a new block, separated by a blank line.
///
/// Each part is terminated with a newline unless it already ends with one, so
/// `"a"` + `"b"` gives `"a\n\nb\n"`. Empty existing content still produces the
/// leading blank line; output stays byte-compatible with the host tool.
/// Content is treated as bytes and need not be UTF-8.
pub fn append_block(existing: &[u8], block: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(existing.len() + block.len() + 3);
    push_line(&mut out, existing);
    push_line(&mut out, b"");
    push_line(&mut out, block);
    out
}

fn push_line(out: &mut Vec<u8>, text: &[u8]) {
    out.extend_from_slice(text);
    if !text.ends_with(b"\n") {
        out.push(b'\n');
    }
}

/// Append `block` to the Guardfile at `path`, rewriting it atomically.
pub fn append_to_file(path: &Path, block: &[u8]) -> Result<()> {
    let existing = read_bytes(path)?;
    atomic_write(path, &append_block(&existing, block))
}

/// Whether the Guardfile declares plugin `name` (`guard :name`, `guard 'name'`,
/// `guard "name"`, optionally parenthesized). Commented lines are ignored.
pub fn includes_plugin(content: &str, name: &str) -> bool {
    let pattern = format!(
        r#"^\s*guard\s*\(?\s*(?::{n}\b|'{n}'|"{n}")"#,
        n = regex::escape(name)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return false;
    };

    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .any(|line| re.is_match(line))
}
