//! Config file discovery

use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bitburner-sync.json";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Find the config file to load, if any
    ///
    /// An explicit path always wins, even if it does not exist, so that a
    /// mistyped `--config` surfaces as an error instead of being ignored.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>, no_config: bool, cwd: &Path) -> Option<PathBuf> {
        if no_config {
            return None;
        }

        if let Some(path) = cli_path {
            return Some(cwd.join(path));
        }

        let candidate = cwd.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }
}
