//! Wire types of the game's file API

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a file is being uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadAction {
    /// New file seen by the watcher
    Create,
    /// Existing file changed under the watcher
    Update,
    /// Batch sync, the file may or may not exist remotely
    Upsert,
}

impl UploadAction {
    /// Verb used when reporting a successful upload
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Create => "Added",
            Self::Update => "Changed",
            Self::Upsert => "Uploaded",
        }
    }
}

impl fmt::Display for UploadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Upsert => "UPSERT",
        })
    }
}

/// POST body
#[derive(Debug, Serialize)]
pub(crate) struct UploadRequest<'a> {
    pub filename: &'a str,
    /// Base64 of the file content
    pub code: String,
}

/// DELETE body
#[derive(Debug, Serialize)]
pub(crate) struct DeleteRequest<'a> {
    pub filename: &'a str,
}

/// A script stored in the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteFile {
    /// Filename as the game reports it
    pub filename: String,
    /// Script source
    pub code: String,
    /// RAM cost in GB, if the game computed one
    #[serde(rename = "ramUsage", default)]
    pub ram_usage: Option<f64>,
}

impl RemoteFile {
    /// Create a remote file entry
    #[must_use]
    pub fn new(filename: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            code: code.into(),
            ram_usage: None,
        }
    }
}

/// GET response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[allow(dead_code)]
    pub success: bool,
    pub data: ListData,
}

/// Both levels are required; a listing without them is not an empty game
#[derive(Debug, Deserialize)]
pub(crate) struct ListData {
    pub files: Vec<RemoteFile>,
}
