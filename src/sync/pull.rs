//! Game to local synchronization

use anyhow::Context;

use super::{SyncResult, local, plan};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::filename;
use crate::remote::BitburnerClient;
use crate::scanner;

/// Write every remote script to disk, deleting local leftovers if allowed
///
/// # Errors
///
/// Returns an error if the remote listing fails, or on the first failed
/// write or delete.
pub async fn pull(
    config: &SyncConfig,
    client: &BitburnerClient,
    dry_run: bool,
) -> Result<SyncResult> {
    let remote = client
        .list()
        .await
        .context("Failed to retrieve files from bitburner")?;
    tracing::info!("Got {} files from bitburner", remote.len());

    let existing = if config.allow_delete {
        Some(scanner::collect(&config.script_root, &config.filter)?)
    } else {
        None
    };

    let plan = plan::plan_pull(&remote, existing.as_ref(), config.allow_delete);
    let mut result = SyncResult::new(dry_run);

    for file in plan.writes {
        let name = filename::normalize(&file.filename);

        match file.ram_usage {
            Some(ram) => tracing::info!(file = %name, "RAM usage: {ram}GB"),
            None => tracing::info!(file = %name, "Retrieved"),
        }

        if !dry_run {
            local::save(&config.script_root, &name, &file.code)?;
        }
        result.written.push(name);
    }

    for name in plan.deletions {
        if dry_run {
            tracing::info!(file = %name, "Would be deleted from disk");
        } else {
            local::remove(&config.script_root, &name)?;
            tracing::info!(file = %name, "Deleted from disk");
        }
        result.deleted.push(name);
    }

    Ok(result)
}
