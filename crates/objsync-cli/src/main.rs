mod config;
mod observability;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use objsync_db_postgres::create_storage;
use objsync_reconcile::run_reconciliation;

/// Reconciles pending documents onto the object store in one batch pass.
#[derive(Debug, Parser)]
#[command(name = "objsync", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, env = "OBJSYNC_CONFIG", default_value = "objsync.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    // Load .env if present, before anything reads the environment.
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: failed to load .env file: {e}");
        }
    }

    let cli = Cli::parse();

    let cfg = match config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            std::process::exit(2);
        }
    };

    observability::init_tracing(&cfg.logging.level);
    tracing::info!(path = %cli.config.display(), "configuration loaded");

    if let Err(e) = run(cfg).await {
        tracing::error!(error = %format!("{e:#}"), "reconciliation run failed");
        std::process::exit(1);
    }
}

async fn run(cfg: config::AppConfig) -> Result<()> {
    let storage = create_storage(cfg.postgres)
        .await
        .context("failed to initialize PostgreSQL storage")?;

    let summary = run_reconciliation(storage.as_ref())
        .await
        .context("reconciliation run failed")?;

    tracing::info!(
        documents = summary.documents,
        skipped = summary.skipped_documents,
        actions = summary.actions,
        status_writes = summary.status_writes,
        owner_writes = summary.owner_writes,
        "run finished"
    );

    Ok(())
}
