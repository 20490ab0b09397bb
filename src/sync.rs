//! One-shot synchronization in both directions
//!
//! - push: local scripts are uploaded, remote leftovers optionally deleted
//! - pull: remote scripts are written to disk, local leftovers optionally deleted
//!
//! Decisions come from [`plan`]; the executors either carry them out or, in
//! a dry run, only log them.

pub mod local;
pub mod plan;
mod pull;
mod push;
mod reporting;

pub use pull::pull;
pub use push::push;
pub use reporting::SyncReporter;

use crate::error::RemoteError;
use crate::remote::{BitburnerClient, RemoteReply, UploadAction};

/// Synchronization result listing the files touched
#[derive(Debug, Clone, Default)]
pub struct SyncResult {
    /// Whether the operations were only reported
    pub dry_run: bool,
    /// Files uploaded to the game
    pub uploaded: Vec<String>,
    /// Files written to disk
    pub written: Vec<String>,
    /// Files deleted, remotely for a push, locally for a pull
    pub deleted: Vec<String>,
    /// Per-file failures that did not abort the run
    pub errors: Vec<String>,
}

impl SyncResult {
    /// Empty result for a real or dry run
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Total operations performed
    #[must_use]
    pub fn total_operations(&self) -> usize {
        self.uploaded.len() + self.written.len() + self.deleted.len()
    }

    /// Whether sync was successful (no errors)
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Upload one script and log the outcome
pub(crate) async fn upload_file(
    client: &BitburnerClient,
    filename: &str,
    code: &str,
    action: UploadAction,
) -> Result<RemoteReply, RemoteError> {
    let outcome = client.upload(filename, code, action).await;

    match &outcome {
        Ok(reply) => tracing::info!(file = %filename, "{}{}", action.verb(), reply.detail),
        Err(e) => tracing::error!(file = %filename, "Failed to push - {e}"),
    }

    outcome
}

/// Delete one remote script and log the outcome
pub(crate) async fn delete_remote_file(
    client: &BitburnerClient,
    filename: &str,
) -> Result<RemoteReply, RemoteError> {
    let outcome = client.delete(filename).await;

    match &outcome {
        Ok(reply) => tracing::info!(file = %filename, "Deleted{}", reply.detail),
        Err(e) => tracing::error!(file = %filename, "Failed to delete - {e}"),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_counts() {
        let mut result = SyncResult::new(false);
        result.uploaded.push("a.js".to_string());
        result.deleted.push("b.js".to_string());

        assert_eq!(result.total_operations(), 2);
        assert!(result.is_success());

        result.errors.push("c.js: Unauthorized".to_string());
        assert!(!result.is_success());
    }
}
