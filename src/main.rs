//! cargo-version-field: print or rewrite the version of a manifest file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cargo_version_field::manifest::{read_manifest_version, write_manifest_version, WriteOutcome};
use cargo_version_field::VersionField;

#[derive(Debug, Parser)]
#[command(author, version, about = "Read or rewrite the version field of a manifest", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the current version")]
    Get {
        #[arg(default_value = "Cargo.toml")]
        path: PathBuf,
    },
    #[command(about = "Replace the current version")]
    Set {
        #[arg(value_name = "VERSION")]
        new_version: String,
        #[arg(default_value = "Cargo.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let updater = VersionField::new();

    match cli.command {
        Commands::Get { path } => {
            let version = read_manifest_version(&path, &updater)
                .with_context(|| format!("could not read version from {}", path.display()))?;
            println!("{version}");
        }
        Commands::Set { new_version, path } => {
            let outcome = write_manifest_version(&path, &new_version, &updater)
                .with_context(|| format!("could not update {}", path.display()))?;
            match outcome {
                WriteOutcome::Updated { previous } => {
                    println!("{}: {} -> {}", path.display(), previous, new_version);
                }
                WriteOutcome::Unchanged => {
                    println!("{}: unchanged", path.display());
                }
            }
        }
    }

    Ok(())
}
