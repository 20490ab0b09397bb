mod cli;
mod commands;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use bitburner_sync::config::{ConfigManager, ConfigValidator};
use bitburner_sync::{BitburnerClient, RunMode};
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    // Set up Ctrl+C handler; this is the only way out of watch mode
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    // Mode flags are checked before anything touches the disk or network
    let mode = ConfigValidator::run_mode(cli.watch, cli.get, cli.dry_run)?;

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = ConfigManager::load(
        &cli.overrides(),
        cli.config.as_deref(),
        cli.no_config,
        &cwd,
    )?;

    tracing::debug!(?mode, server = %config.server.endpoint(), "configuration loaded");

    let client = BitburnerClient::new(&config.server, &config.auth_token)?;

    match mode {
        RunMode::Push { dry_run } => commands::Push::execute(&config, &client, dry_run).await,
        RunMode::Pull { dry_run } => commands::Pull::execute(&config, &client, dry_run).await,
        RunMode::Watch => commands::Watch::execute(&config, &client).await,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
