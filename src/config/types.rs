//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scanner::ScriptFilter;

/// Host the game client listens on unless told otherwise
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port of the game client's file API
pub const DEFAULT_PORT: u16 = 9990;

/// Contents of `bitburner-sync.json`
///
/// Every key is optional; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    /// The authorization token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// The root directory where the scripts are
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_root: Option<String>,

    /// If the sync should be allowed to delete files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_delete: Option<bool>,

    /// Host (or full base URL) of the game client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    /// Port of the game client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Script extensions to sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

/// Where the game client's file API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    /// Host name, IP, or a base URL with scheme
    pub host: String,
    /// TCP port, ignored when `host` already carries a scheme
    pub port: u16,
}

impl Default for ServerAddress {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerAddress {
    /// Create an address from host and port
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// URL every request is sent to
    #[must_use]
    pub fn endpoint(&self) -> String {
        if self.host.contains("://") {
            format!("{}/", self.host.trim_end_matches('/'))
        } else {
            format!("http://{}:{}/", self.host, self.port)
        }
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Local directory mirrored to the game
    pub script_root: PathBuf,
    /// Bearer token for the game's API
    pub auth_token: String,
    /// Whether files missing on the source side get deleted
    pub allow_delete: bool,
    /// Game client address
    pub server: ServerAddress,
    /// Which local files are scripts
    pub filter: ScriptFilter,
}

impl SyncConfig {
    /// Create a config with default server, filter and deletion disabled
    #[must_use]
    pub fn new(script_root: impl Into<PathBuf>, auth_token: impl Into<String>) -> Self {
        Self {
            script_root: script_root.into(),
            auth_token: auth_token.into(),
            allow_delete: false,
            server: ServerAddress::default(),
            filter: ScriptFilter::default(),
        }
    }

    /// Enable or disable deletions
    #[must_use]
    pub fn with_allow_delete(mut self, allow_delete: bool) -> Self {
        self.allow_delete = allow_delete;
        self
    }

    /// Point at a different game client
    #[must_use]
    pub fn with_server(mut self, server: ServerAddress) -> Self {
        self.server = server;
        self
    }

    /// Use a different script filter
    #[must_use]
    pub fn with_filter(mut self, filter: ScriptFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// What the invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Upload local scripts once
    Push {
        /// Only report what would happen
        dry_run: bool,
    },
    /// Download remote scripts once
    Pull {
        /// Only report what would happen
        dry_run: bool,
    },
    /// Upload continuously as files change
    Watch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_config_camel_case() {
        let json = r#"{
            "authToken": "secret",
            "scriptRoot": "./scripts",
            "allowDelete": true,
            "serverUrl": "localhost",
            "port": 9991,
            "extensions": [".js"]
        }"#;

        let config: FileConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.script_root.as_deref(), Some("./scripts"));
        assert_eq!(config.allow_delete, Some(true));
        assert_eq!(config.server_url.as_deref(), Some("localhost"));
        assert_eq!(config.port, Some(9991));
        assert_eq!(config.extensions, Some(vec![".js".to_string()]));
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        let result = serde_json::from_str::<FileConfig>(r#"{"authTokn": "typo"}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn test_file_config_rejects_non_string_token() {
        let result = serde_json::from_str::<FileConfig>(r#"{"authToken": 12345}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_config_empty() {
        let config: FileConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ServerAddress::default().endpoint(), "http://127.0.0.1:9990/");
    }

    #[test]
    fn test_endpoint_with_scheme() {
        let server = ServerAddress::new("http://localhost:1234/", 9990);
        assert_eq!(server.endpoint(), "http://localhost:1234/");
    }

    #[test]
    fn test_sync_config_builder() {
        let config = SyncConfig::new("/scripts", "token")
            .with_allow_delete(true)
            .with_server(ServerAddress::new("localhost", 9000));

        assert!(config.allow_delete);
        assert_eq!(config.server.endpoint(), "http://localhost:9000/");
        assert_eq!(config.filter, ScriptFilter::default());
    }
}
