//! Local script collection
//!
//! Walks the script root recursively and reads every recognized script into a
//! [`FileMapping`] keyed by its normalized remote filename.
//!
//! Symlinks are followed. A symlink cycle surfaces as a walk error rather
//! than being skipped.

mod filters;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

pub use filters::{DEFAULT_EXTENSIONS, DEFAULT_IGNORED_DIRS, ScriptFilter};

use crate::error::Result;
use crate::filename;

/// Normalized filename to file content
pub type FileMapping = BTreeMap<String, String>;

/// Collect every script below `root`
///
/// # Errors
///
/// Returns an error if the root is missing, a directory cannot be read, or a
/// file cannot be read.
pub fn collect(root: &Path, filter: &ScriptFilter) -> Result<FileMapping> {
    let mut files = FileMapping::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !filter.is_ignored_dir(name))
        });

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        let path = entry.path();

        if !entry.file_type().is_file() || !filter.is_script(path) {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("Failed to strip prefix from {}", path.display()))?;

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        files.insert(
            filename::from_relative_path(relative),
            String::from_utf8_lossy(&bytes).into_owned(),
        );
    }

    Ok(files)
}
