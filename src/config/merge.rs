//! Layering of CLI flags, environment and config file
//!
//! # Precedence
//!
//! Flag > environment variable > `bitburner-sync.json` > built-in default.
//! Flags and environment are already folded together by clap, so they arrive
//! here as a single [`CliOverrides`] layer.
//!
//! `allowDelete` uses OR semantics: any layer enabling it enables it, since a
//! boolean flag cannot express "explicitly off".

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{FileConfig, ServerAddress, SyncConfig};
use crate::error::ConfigError;
use crate::scanner::ScriptFilter;

/// Settings taken from flags and environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--scriptRoot`
    pub script_root: Option<PathBuf>,
    /// `--authToken`
    pub auth_token: Option<String>,
    /// `--serverUrl`
    pub server_url: Option<String>,
    /// `--port`
    pub port: Option<u16>,
    /// `--allowDelete`
    pub allow_delete: bool,
}

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Read and parse a config file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFile`] if the file cannot be read, is not
    /// JSON, has unknown keys, or has wrongly typed values.
    pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::InvalidFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Merge the layers into a config
    ///
    /// Relative script roots resolve against `cwd`; a missing root means
    /// `cwd` itself.
    #[must_use]
    pub fn merge(overrides: &CliOverrides, file: Option<FileConfig>, cwd: &Path) -> SyncConfig {
        let file = file.unwrap_or_default();

        let script_root = overrides
            .script_root
            .clone()
            .or_else(|| file.script_root.map(PathBuf::from))
            .map_or_else(|| cwd.to_path_buf(), |root| cwd.join(root));

        let auth_token = overrides
            .auth_token
            .clone()
            .or(file.auth_token)
            .unwrap_or_default();

        let defaults = ServerAddress::default();
        let server = ServerAddress::new(
            overrides
                .server_url
                .clone()
                .or(file.server_url)
                .unwrap_or(defaults.host),
            overrides.port.or(file.port).unwrap_or(defaults.port),
        );

        let filter = match file.extensions {
            Some(extensions) => ScriptFilter::new().with_extensions(extensions),
            None => ScriptFilter::new(),
        };

        SyncConfig {
            script_root,
            auth_token,
            allow_delete: overrides.allow_delete || file.allow_delete.unwrap_or(false),
            server,
            filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_merge_defaults() {
        let cwd = Path::new("/work");
        let config = ConfigMerger::merge(&CliOverrides::default(), None, cwd);

        assert_eq!(config.script_root, PathBuf::from("/work"));
        assert_eq!(config.auth_token, "");
        assert!(!config.allow_delete);
        assert_eq!(config.server, ServerAddress::default());
    }

    #[test]
    fn test_file_fills_missing_flags() {
        let file = FileConfig {
            auth_token: Some("from-file".to_string()),
            script_root: Some("scripts".to_string()),
            server_url: Some("localhost".to_string()),
            port: Some(1234),
            ..FileConfig::default()
        };

        let config = ConfigMerger::merge(&CliOverrides::default(), Some(file), Path::new("/work"));

        assert_eq!(config.auth_token, "from-file");
        assert_eq!(config.script_root, PathBuf::from("/work/scripts"));
        assert_eq!(config.server, ServerAddress::new("localhost", 1234));
    }

    #[test]
    fn test_flags_beat_file() {
        let file = FileConfig {
            auth_token: Some("from-file".to_string()),
            script_root: Some("scripts".to_string()),
            ..FileConfig::default()
        };
        let overrides = CliOverrides {
            auth_token: Some("from-flag".to_string()),
            script_root: Some(PathBuf::from("/abs/root")),
            ..CliOverrides::default()
        };

        let config = ConfigMerger::merge(&overrides, Some(file), Path::new("/work"));

        assert_eq!(config.auth_token, "from-flag");
        assert_eq!(config.script_root, PathBuf::from("/abs/root"));
    }

    #[test]
    fn test_allow_delete_or_semantics() {
        let file = FileConfig {
            allow_delete: Some(true),
            ..FileConfig::default()
        };
        let config = ConfigMerger::merge(&CliOverrides::default(), Some(file), Path::new("/"));
        assert!(config.allow_delete);

        let overrides = CliOverrides {
            allow_delete: true,
            ..CliOverrides::default()
        };
        let file = FileConfig {
            allow_delete: Some(false),
            ..FileConfig::default()
        };
        let config = ConfigMerger::merge(&overrides, Some(file), Path::new("/"));
        assert!(config.allow_delete);
    }

    #[test]
    fn test_file_extensions() {
        let file = FileConfig {
            extensions: Some(vec!["js".to_string()]),
            ..FileConfig::default()
        };
        let config = ConfigMerger::merge(&CliOverrides::default(), Some(file), Path::new("/"));
        assert_eq!(config.filter.extensions(), &[".js".to_string()]);
    }

    #[test]
    fn test_load_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bitburner-sync.json");
        fs::write(&path, r#"{"authToken": "abc", "bogus": 1}"#).unwrap();

        let err = ConfigMerger::load_file(&path).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("bitburner-sync.json"));
        assert!(message.contains("unknown field"));
    }

    #[test]
    fn test_load_file_missing() {
        let tmp = TempDir::new().unwrap();
        let result = ConfigMerger::load_file(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::InvalidFile { .. })));
    }

    #[test]
    fn test_load_file_valid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bitburner-sync.json");
        fs::write(&path, r#"{"authToken": "abc", "allowDelete": true}"#).unwrap();

        let file = ConfigMerger::load_file(&path).unwrap();
        assert_eq!(file.auth_token.as_deref(), Some("abc"));
        assert_eq!(file.allow_delete, Some(true));
    }
}
