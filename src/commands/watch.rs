use anyhow::Context;
use bitburner_sync::{BitburnerClient, SyncConfig, watch};

pub struct Watch;

impl Watch {
    pub async fn execute(config: &SyncConfig, client: &BitburnerClient) -> anyhow::Result<()> {
        tracing::info!(
            root = %config.script_root.display(),
            allow_delete = config.allow_delete,
            "watching for changes"
        );

        watch::watch(config, client)
            .await
            .context("Watch mode failed")
    }
}
