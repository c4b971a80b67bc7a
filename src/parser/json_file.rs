//! JSON document file I/O.
//!
//! Reading distinguishes unreadable files from unparsable content in the
//! error chain. Writing goes through a temporary file in the target
//! directory followed by a rename, so a concurrent reader never observes a
//! partially written document.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reads and parses a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

/// Serializes a document as pretty JSON with a trailing newline.
pub fn to_pretty_string<T: Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    text.push('\n');
    Ok(text)
}

/// Writes a document atomically: serialize, write to `<path>.tmp`, rename.
///
/// Parent directories are created if missing. The temporary file is removed
/// on failure.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let text = to_pretty_string(value)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = Path::new(&tmp_path);

    let write_result = fs::write(tmp_path, &text)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))
        .and_then(|()| {
            fs::rename(tmp_path, path)
                .with_context(|| format!("Failed to move output into place at {}", path.display()))
        });

    if write_result.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    write_result
}
