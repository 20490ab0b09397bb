//! Writing and deleting scripts under the script root

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;
use crate::filename;

/// Map a remote filename to a path under `root`
///
/// # Errors
///
/// Returns an error for empty names and names with `.` or `..` segments,
/// which could otherwise point outside the script root.
pub fn resolve(root: &Path, name: &str) -> Result<PathBuf> {
    let normalized = filename::normalize(name);
    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        anyhow::bail!("Empty filename cannot be stored locally");
    }

    if segments.iter().any(|s| *s == "." || *s == "..") {
        anyhow::bail!("Refusing to touch '{name}' outside the script root");
    }

    Ok(segments
        .into_iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment)))
}

/// Write a script, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the name is invalid or the write fails.
pub fn save(root: &Path, name: &str, code: &str) -> Result<()> {
    let path = resolve(root, name)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&path, code).with_context(|| format!("Failed to write {}", path.display()))
}

/// Delete a script
///
/// # Errors
///
/// Returns an error if the name is invalid or the file cannot be removed.
pub fn remove(root: &Path, name: &str) -> Result<()> {
    let path = resolve(root, name)?;
    fs::remove_file(&path).with_context(|| format!("Failed to delete {}", path.display()))
}
