//! Configuration loading, merging, and validation
//!
//! This module handles:
//! - Discovery of `bitburner-sync.json`
//! - JSON parsing with serde, rejecting unknown keys
//! - Layering flags and environment over the file
//! - Validation of mode flags, auth token and script root

mod discovery;
mod merge;
mod types;
mod validation;

use std::path::Path;

pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery};
pub use merge::{CliOverrides, ConfigMerger};
pub use types::{DEFAULT_HOST, DEFAULT_PORT, FileConfig, RunMode, ServerAddress, SyncConfig};
pub use validation::{ConfigValidator, MIN_TOKEN_LENGTH};

use crate::error::ConfigError;

/// Configuration manager that coordinates discovery, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load the config for an invocation run from `cwd`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config file is invalid or the merged
    /// configuration fails validation.
    pub fn load(
        overrides: &CliOverrides,
        config_path: Option<&Path>,
        no_config: bool,
        cwd: &Path,
    ) -> Result<SyncConfig, ConfigError> {
        let file = ConfigDiscovery::discover(config_path, no_config, cwd)
            .map(|path| {
                tracing::debug!(path = %path.display(), "loading config file");
                ConfigMerger::load_file(&path)
            })
            .transpose()?;

        let merged = ConfigMerger::merge(overrides, file, cwd);

        ConfigValidator::validate(merged)
    }
}
