//! Local to game synchronization

use anyhow::Context;
use tokio::task::JoinSet;

use super::{SyncResult, delete_remote_file, plan, upload_file};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::remote::{BitburnerClient, UploadAction};
use crate::scanner;

enum RemoteOp {
    Upload,
    Delete,
}

/// Upload every local script, deleting remote leftovers if allowed
///
/// Requests are dispatched together and may complete in any order. A failed
/// request is recorded in the result and does not stop the others.
///
/// # Errors
///
/// Returns an error if the script root cannot be scanned, or if deletions
/// are allowed and the remote listing cannot be retrieved.
pub async fn push(
    config: &SyncConfig,
    client: &BitburnerClient,
    dry_run: bool,
) -> Result<SyncResult> {
    let mut local = scanner::collect(&config.script_root, &config.filter)?;
    tracing::info!("Found {} files to sync", local.len());

    let remote = if config.allow_delete {
        Some(
            client
                .list()
                .await
                .context("Failed to retrieve files from bitburner")?,
        )
    } else {
        None
    };

    let plan = plan::plan_push(&local, remote.as_deref(), config.allow_delete);
    let mut result = SyncResult::new(dry_run);

    if dry_run {
        for filename in plan.uploads {
            tracing::info!(file = %filename, "Would be uploaded");
            result.uploaded.push(filename);
        }
        for filename in plan.deletions {
            tracing::info!(file = %filename, "Would be deleted from bitburner");
            result.deleted.push(filename);
        }
        return Ok(result);
    }

    let mut tasks = JoinSet::new();

    for filename in plan.uploads {
        let Some(code) = local.remove(&filename) else {
            continue;
        };
        let client = client.clone();
        tasks.spawn(async move {
            let outcome = upload_file(&client, &filename, &code, UploadAction::Upsert).await;
            (RemoteOp::Upload, filename, outcome.map(|_| ()))
        });
    }

    for filename in plan.deletions {
        let client = client.clone();
        tasks.spawn(async move {
            let outcome = delete_remote_file(&client, &filename).await;
            (RemoteOp::Delete, filename, outcome.map(|_| ()))
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (op, filename, outcome) = joined.context("Sync task failed")?;
        match (op, outcome) {
            (RemoteOp::Upload, Ok(())) => result.uploaded.push(filename),
            (RemoteOp::Delete, Ok(())) => result.deleted.push(filename),
            (_, Err(e)) => result.errors.push(format!("{filename}: {e}")),
        }
    }

    Ok(result)
}
