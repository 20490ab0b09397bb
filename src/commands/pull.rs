use anyhow::Context;
use bitburner_sync::sync::{self, SyncReporter};
use bitburner_sync::{BitburnerClient, SyncConfig};

pub struct Pull;

impl Pull {
    pub async fn execute(
        config: &SyncConfig,
        client: &BitburnerClient,
        dry_run: bool,
    ) -> anyhow::Result<()> {
        tracing::debug!(
            root = %config.script_root.display(),
            endpoint = client.endpoint(),
            dry_run,
            "pulling scripts"
        );

        let result = sync::pull(config, client, dry_run)
            .await
            .context("Get operation failed")?;

        println!("{}", SyncReporter::generate_summary(&result));
        Ok(())
    }
}
