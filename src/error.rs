//! Error types shared across the crate

use std::path::PathBuf;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Problems with the flags, environment or config file, raised before any I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Two run modes that cannot be combined were requested
    #[error("Cannot specify both {first} and {second}")]
    ConflictingModes {
        /// The first flag
        first: &'static str,
        /// The flag it conflicts with
        second: &'static str,
    },

    /// The auth token is missing or too short to be valid
    #[error("AuthToken is too short")]
    TokenTooShort,

    /// The script root does not resolve to a directory
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The config file could not be read or parsed
    #[error("{} - {reason}", .path.display())]
    InvalidFile {
        /// Path of the offending config file
        path: PathBuf,
        /// Parser or I/O message
        reason: String,
    },
}

/// Failures talking to the game client
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The request never got a response
    #[error("Network exception - {0}")]
    Network(#[from] reqwest::Error),

    /// The game rejected the auth token
    #[error("Unauthorized{detail}")]
    Unauthorized {
        /// Extra information extracted from the response body
        detail: String,
    },

    /// The game answered with an unexpected status code
    #[error("HTTP {status}{detail}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Extra information extracted from the response body
        detail: String,
    },

    /// The game answered but reported `success: false`
    #[error("Request failed{detail}")]
    Failed {
        /// Extra information extracted from the response body
        detail: String,
    },

    /// The game client predates the file listing API
    #[error("The bitburner client is too old for retrieval")]
    OutdatedServer,

    /// The response body could not be understood
    #[error("Failed to parse files - {0}")]
    Parse(String),

    /// The auth token cannot be sent as an HTTP header
    #[error("AuthToken contains characters that are not allowed in a header")]
    InvalidToken,
}
