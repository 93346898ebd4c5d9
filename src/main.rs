use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::prelude::*;

use asset_tag_fragments::output::{collect_asset_names, write_fragments};
use asset_tag_fragments::{FragmentConfig, FragmentGenerator, MergePolicy};

/// Emit HTML fragments referencing the js/css assets of a finished build.
#[derive(Debug, Parser)]
#[command(about, version)]
struct Cli {
    /// Bundler output directory to scan and write fragments into.
    dist: PathBuf,
    /// Path to the config file [default: fragments.config.json]
    #[arg(long)]
    config: Option<PathBuf>,
    /// Append to existing fragment files instead of overwriting them.
    #[arg(long)]
    append: bool,
    /// Enable verbose logging.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Be more quiet, conflicts with --verbose
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        // Filter spans based on the RUST_LOG env var.
        .with(eval_logging(&cli))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .try_init()
        .context("error initializing logging")?;

    let config = load_config(&cli);
    let policy = if cli.append {
        MergePolicy::Append
    } else {
        config.merge
    };

    let asset_names = collect_asset_names(&cli.dist)?;
    let artifacts = FragmentGenerator::new(config).generate(&asset_names);
    if artifacts.is_empty() {
        tracing::info!("no js/css assets found, nothing to emit");
        return Ok(());
    }

    let written = write_fragments(&cli.dist, &artifacts, policy)?;
    tracing::info!(
        fragments = written.len(),
        assets = asset_names.len(),
        "emitted asset tag fragments"
    );
    Ok(())
}

fn load_config(cli: &Cli) -> FragmentConfig {
    match &cli.config {
        Some(path) => FragmentConfig::from_path(path).unwrap_or_else(|| {
            tracing::warn!(path = %path.display(), "could not load config, using defaults");
            FragmentConfig::default()
        }),
        None => FragmentConfig::discover(Path::new(".")),
    }
}

fn eval_logging(cli: &Cli) -> tracing_subscriber::EnvFilter {
    let directives = match (cli.verbose, cli.quiet) {
        // quiet overrides verbose
        (_, true) => "error",
        (0, false) => "info",
        (1, false) => "debug",
        (_, false) => "trace",
    };
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives))
}
