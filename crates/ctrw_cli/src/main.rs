//! ctrw - Command Line Operations for Continuous-Time Random Walks
//!
//! # Commands
//!
//! - `ctrw simulate --horizon <T>` - Simulate one walk and print it
//! - `ctrw msd --walks <N> --horizon <T>` - Ensemble mean squared displacement
//! - `ctrw validate --distribution <gaussian|exponential>` - Check a generator
//!
//! # Configuration
//!
//! Defaults are read from `ctrw.toml` (or `--config <path>`) when present;
//! flags override file values. Set `RUST_LOG` or pass `--verbose` for logs.

use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::{Distribution, OutputFormat};
use config::CliConfig;

/// Continuous-time random walk simulator
#[derive(Parser)]
#[command(name = "ctrw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "ctrw.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single walk up to a time horizon
    Simulate {
        /// Time horizon to simulate to
        #[arg(short = 't', long)]
        horizon: Option<f64>,

        /// Master seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Mean squared displacement of an ensemble of walks
    Msd {
        /// Number of independent walks
        #[arg(short = 'n', long)]
        walks: Option<usize>,

        /// Time horizon to simulate to
        #[arg(short = 't', long)]
        horizon: Option<f64>,

        /// Grid points from 0 to the horizon (default: integer times)
        #[arg(short, long)]
        points: Option<usize>,

        /// Master seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Compare a variate generator with its theoretical law
    Validate {
        /// Distribution to test (gaussian, exponential)
        #[arg(short, long, default_value = "gaussian")]
        distribution: String,

        /// Number of draws
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Histogram bins
        #[arg(short, long)]
        bins: Option<usize>,

        /// Generator seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file = if Path::new(&cli.config).exists() {
        let file = CliConfig::from_file(&cli.config)?;
        info!(config = %cli.config, "configuration loaded");
        file
    } else {
        info!(config = %cli.config, "configuration file not found, using defaults");
        CliConfig::default()
    };

    match cli.command {
        Commands::Simulate {
            horizon,
            seed,
            format,
        } => {
            let walk = file.walk.to_walk_config(seed)?;
            let format = format.as_deref().unwrap_or(file.simulate.format.as_str());
            let format = OutputFormat::parse(format)?;
            commands::simulate::run(walk, horizon.unwrap_or(file.simulate.horizon), format)
        }
        Commands::Msd {
            walks,
            horizon,
            points,
            seed,
            format,
        } => {
            let walk = file.walk.to_walk_config(seed)?;
            let format = format.as_deref().unwrap_or(file.msd.format.as_str());
            let format = OutputFormat::parse(format)?;
            commands::msd::run(
                walk,
                walks.unwrap_or(file.msd.walks),
                horizon.unwrap_or(file.msd.horizon),
                points.or(file.msd.points),
                format,
            )
        }
        Commands::Validate {
            distribution,
            samples,
            bins,
            seed,
        } => commands::validate::run(
            Distribution::parse(&distribution)?,
            samples.unwrap_or(file.validate.samples),
            bins.unwrap_or(file.validate.bins),
            seed.or(file.validate.seed),
        ),
    }
}
