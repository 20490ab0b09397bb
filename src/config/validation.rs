//! Configuration validation
//!
//! Everything here runs before any file is scanned or request is sent.

use super::types::{RunMode, SyncConfig};
use crate::error::ConfigError;

/// Shortest auth token the game will ever issue
pub const MIN_TOKEN_LENGTH: usize = 3;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Turn the mode flags into a run mode
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingModes`] for `watch` combined with
    /// `dry_run` or `get`.
    pub fn run_mode(watch: bool, get: bool, dry_run: bool) -> Result<RunMode, ConfigError> {
        if dry_run && watch {
            return Err(ConfigError::ConflictingModes {
                first: "dryRun",
                second: "watch",
            });
        }

        if get && watch {
            return Err(ConfigError::ConflictingModes {
                first: "get",
                second: "watch",
            });
        }

        Ok(if watch {
            RunMode::Watch
        } else if get {
            RunMode::Pull { dry_run }
        } else {
            RunMode::Push { dry_run }
        })
    }

    /// Validate a merged configuration
    ///
    /// On success the script root is replaced by its canonical form, which
    /// is what filesystem watch events are reported against.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is too short or the script root is not
    /// a directory.
    pub fn validate(mut config: SyncConfig) -> Result<SyncConfig, ConfigError> {
        if config.auth_token.chars().count() < MIN_TOKEN_LENGTH {
            return Err(ConfigError::TokenTooShort);
        }

        if !config.script_root.is_dir() {
            return Err(ConfigError::NotADirectory(config.script_root));
        }

        config.script_root = dunce::canonicalize(&config.script_root)
            .map_err(|_| ConfigError::NotADirectory(config.script_root.clone()))?;

        Ok(config)
    }
}
