use clap::Parser;
use std::path::PathBuf;

use bitburner_sync::config::CliOverrides;

/// Bitburner script synchronization tool
///
/// Push the scripts in a local directory to a running Bitburner game, pull them
/// back, or keep pushing them as they change
#[derive(Parser, Debug)]
#[command(name = "bitburner-sync")]
#[command(about, long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// The local directory to sync with
    #[arg(
        long = "scriptRoot",
        alias = "script-root",
        env = "BITBURNER_SYNC_SCRIPT_ROOT",
        value_name = "PATH"
    )]
    pub script_root: Option<PathBuf>,

    /// API authorization token
    #[arg(
        long = "authToken",
        alias = "auth-token",
        env = "BITBURNER_SYNC_AUTH_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    pub auth_token: Option<String>,

    /// Host of the game client [default: 127.0.0.1]
    #[arg(
        long = "serverUrl",
        alias = "server-url",
        env = "BITBURNER_SYNC_SERVER_URL",
        value_name = "HOST"
    )]
    pub server_url: Option<String>,

    /// Port of the game client [default: 9990]
    #[arg(long, env = "BITBURNER_SYNC_PORT", value_name = "PORT")]
    pub port: Option<u16>,

    /// If the sync should be allowed to delete files
    #[arg(long = "allowDelete", alias = "allow-delete", env = "BITBURNER_SYNC_ALLOW_DELETE")]
    pub allow_delete: bool,

    /// To continuously watch the script root for changes
    #[arg(long)]
    pub watch: bool,

    /// To get all files from the home server and save them in the script root
    #[arg(long)]
    pub get: bool,

    /// To list the files that would be synced. NB: Cannot be used with watch
    #[arg(long = "dryRun", alias = "dry-run")]
    pub dry_run: bool,

    /// Use specific config file instead of ./bitburner-sync.json
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings that take precedence over the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            script_root: self.script_root.clone(),
            auth_token: self.auth_token.clone(),
            server_url: self.server_url.clone(),
            port: self.port,
            allow_delete: self.allow_delete,
        }
    }
}
