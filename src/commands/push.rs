use anyhow::Context;
use bitburner_sync::sync::{self, SyncReporter};
use bitburner_sync::{BitburnerClient, SyncConfig};

pub struct Push;

impl Push {
    pub async fn execute(
        config: &SyncConfig,
        client: &BitburnerClient,
        dry_run: bool,
    ) -> anyhow::Result<()> {
        tracing::debug!(
            root = %config.script_root.display(),
            endpoint = client.endpoint(),
            dry_run,
            "pushing scripts"
        );

        let result = sync::push(config, client, dry_run)
            .await
            .context("Sync operation failed")?;

        println!("{}", SyncReporter::generate_summary(&result));
        Ok(())
    }
}
