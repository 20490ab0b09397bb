//! Game client API
//!
//! Async HTTP client using `reqwest` with Bearer token authentication. All
//! three operations hit the same endpoint and differ only by method:
//! POST uploads, DELETE deletes, GET lists.
//!
//! The client does not log. Callers emit one line per file operation.

mod response;
mod types;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

pub use response::RemoteReply;
pub use types::{RemoteFile, UploadAction};

use crate::config::ServerAddress;
use crate::error::RemoteError;
use crate::filename;
use types::{DeleteRequest, ListResponse, UploadRequest};

/// Client for the game's file API
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct BitburnerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BitburnerClient {
    /// Create a client for the given server and token
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be used as a header value or the
    /// HTTP client cannot be built.
    pub fn new(server: &ServerAddress, auth_token: &str) -> Result<Self, RemoteError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {auth_token}"))
            .map_err(|_| RemoteError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint: server.endpoint(),
        })
    }

    /// URL requests are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload a script
    ///
    /// The filename is normalized and the content base64 encoded. `action`
    /// only affects how the caller reports the result; the game treats every
    /// upload as an upsert.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, 401, any other non-200 status,
    /// or a body reporting failure.
    pub async fn upload(
        &self,
        filename: &str,
        content: &str,
        action: UploadAction,
    ) -> Result<RemoteReply, RemoteError> {
        let filename = filename::normalize(filename);
        tracing::debug!(%filename, %action, "uploading");

        let request = UploadRequest {
            filename: &filename,
            code: STANDARD.encode(content),
        };

        let resp = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        response::interpret(status, &body)
    }

    /// Delete a script
    ///
    /// # Errors
    ///
    /// Same as [`Self::upload`].
    pub async fn delete(&self, filename: &str) -> Result<RemoteReply, RemoteError> {
        let filename = filename::normalize(filename);
        tracing::debug!(%filename, "deleting");

        let request = DeleteRequest {
            filename: &filename,
        };

        let resp = self
            .http
            .delete(&self.endpoint)
            .json(&request)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        response::interpret(status, &body)
    }

    /// List every script stored in the game
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-200 status, a body that
    /// is not the expected JSON, or `success: false`.
    pub async fn list(&self) -> Result<Vec<RemoteFile>, RemoteError> {
        tracing::debug!(endpoint = %self.endpoint, "listing remote files");

        let resp = self
            .http
            .get(&self.endpoint)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        // Status and `success: false` first, then the payload itself
        response::interpret(status, &body)?;

        let parsed: ListResponse =
            serde_json::from_str(&body).map_err(|e| RemoteError::Parse(e.to_string()))?;

        Ok(parsed.data.files)
    }
}
