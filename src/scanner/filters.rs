//! Which files count as game scripts

use std::path::{Component, Path};

/// Extensions the game accepts as scripts
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".script", ".ns", ".txt"];

/// Directories never descended into
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules"];

/// Filter deciding which files under the script root are synced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFilter {
    extensions: Vec<String>,
    ignored_dirs: Vec<String>,
}

impl Default for ScriptFilter {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            ignored_dirs: DEFAULT_IGNORED_DIRS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ScriptFilter {
    /// Create a filter with the default extensions and ignored directories
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognized extensions
    ///
    /// A missing leading dot is added, so `js` and `.js` are equivalent.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref();
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        self
    }

    /// Recognized extensions, each with its leading dot
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether the file name ends with a recognized extension
    #[must_use]
    pub fn is_script(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.extensions.iter().any(|ext| name.ends_with(ext.as_str())))
    }

    /// Whether a directory with this name is skipped
    #[must_use]
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|dir| dir == name)
    }

    /// Whether a path relative to the script root should be synced
    ///
    /// Checks the extension and that no parent directory is ignored.
    #[must_use]
    pub fn accepts(&self, relative: &Path) -> bool {
        let Some(parent) = relative.parent() else {
            return false;
        };

        let in_ignored_dir = parent.components().any(|component| match component {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.is_ignored_dir(n)),
            _ => false,
        });

        !in_ignored_dir && self.is_script(relative)
    }
}
