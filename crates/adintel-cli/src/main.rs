mod alerts;
mod brands;

use std::path::{Path, PathBuf};

use adintel_core::Dataset;
use adintel_engine::{Clock, FixedClock, SystemClock};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::alerts::AlertsCommands;
use crate::brands::BrandsArgs;

#[derive(Debug, Parser)]
#[command(name = "adintel")]
#[command(about = "Explore competitor ad spend and alerts")]
struct Cli {
    /// YAML dataset to load instead of the built-in sample data
    #[arg(long, global = true, value_name = "PATH")]
    dataset: Option<PathBuf>,
    /// Evaluate alert ages relative to this instant (RFC 3339) instead of now
    #[arg(long, global = true, value_name = "TIMESTAMP")]
    as_of: Option<DateTime<Utc>>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, filter and sort tracked brands
    Brands(BrandsArgs),
    /// Headline spend and growth figures with the top spenders
    Overview {
        /// Number of top spenders to list
        #[arg(long, default_value_t = 5)]
        top: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List filter values with the number of brands carrying each
    Facets {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Alert inbox, history and rule evaluation
    Alerts {
        #[command(subcommand)]
        command: AlertsCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("adintel: run `adintel --help` for available commands");
        return Ok(());
    };

    let config = adintel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, log_level = %config.log_level, "loaded configuration");

    let dataset_path = cli.dataset.as_deref().or(config.dataset_path.as_deref());
    let dataset = load_dataset(dataset_path)?;
    let clock: Box<dyn Clock> = match cli.as_of {
        Some(instant) => Box::new(FixedClock(instant)),
        None => Box::new(SystemClock),
    };

    match command {
        Commands::Brands(args) => brands::run_brands(&dataset, &config, clock.as_ref(), &args),
        Commands::Overview { top, json } => brands::run_overview(&dataset, top, json),
        Commands::Facets { json } => brands::run_facets(&dataset, json),
        Commands::Alerts { command } => {
            alerts::run_alerts(&dataset, &config, clock.as_ref(), &command)
        }
    }
}

fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    match path {
        Some(path) => adintel_core::load_dataset(path)
            .with_context(|| format!("failed to load dataset from {}", path.display())),
        None => Dataset::builtin().context("built-in dataset is invalid"),
    }
}
