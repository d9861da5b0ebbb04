//! # Clans CLI
//!
//! Applies the clans schema and imports legacy clan configs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clans::{config::ConfigLoader, db, schema, seeds, telemetry};

/// Command-line arguments for the clans tool.
#[derive(Parser, Debug)]
#[command(name = "clans")]
#[command(about = "Manage the clans table")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending migrations (default)
    Migrate,
    /// Roll back applied migrations
    Rollback {
        /// Number of migrations to roll back
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// List applied migrations
    Status,
    /// Import clans from a legacy clans_config.json file
    Import {
        /// Path to the legacy config
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from layered env files and variables
    let config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;
    telemetry::init_tracing(&config).context("initializing telemetry")?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    let db = db::init_pool(&config)
        .await
        .context("initializing database connection pool")?;

    match args.command.unwrap_or(Command::Migrate) {
        Command::Migrate => {
            schema::ensure_schema(&db)
                .await
                .context("applying migrations")?;
        }
        Command::Rollback { steps } => {
            schema::rollback(&db, steps)
                .await
                .context("rolling back migrations")?;
        }
        Command::Status => {
            let applied = schema::applied_migrations(&db)
                .await
                .context("reading migration history")?;
            if applied.is_empty() {
                println!("No migrations applied.");
            }
            for name in applied {
                println!("{name}");
            }
        }
        Command::Import { path } => {
            schema::ensure_schema(&db)
                .await
                .context("applying migrations")?;
            let report = seeds::import_legacy_config(&db, &path)
                .await
                .with_context(|| format!("importing {}", path.display()))?;
            println!(
                "Imported {} clan(s), skipped {} existing.",
                report.inserted.len(),
                report.skipped.len()
            );
        }
    }

    Ok(())
}
