//! Payoff CLI - Command Line Front End for the Options Payoff Engine
//!
//! # Commands
//!
//! - `payoff price` - Black-Scholes call and put prices
//! - `payoff greeks` - Heuristic display Greeks
//! - `payoff strategies` - Strategy catalog
//! - `payoff evaluate <STRATEGY_ID>` - Payoff curve and breakevens
//! - `payoff presets` - Named market scenarios
//!
//! Parameters start from a preset (`--preset`, else the configured default)
//! and individual flags override single fields. Results go to stdout; logs go
//! to stderr.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::ParamArgs;
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// Options pricing and strategy payoff calculator
#[derive(Parser)]
#[command(name = "payoff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format, default payoff.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put
    Price {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Estimate display Greeks
    Greeks {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// List catalog strategies
    Strategies,

    /// Evaluate a strategy's payoff at expiration
    Evaluate {
        /// Strategy id (e.g. long-call, iron-condor)
        strategy: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// List parameter presets
    Presets,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs {
        config_file: cli.config,
        log_level: cli.log_level,
        format: cli.format,
    })?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        log_level = %config.log_level,
        format = %config.format,
        default_preset = %config.default_preset,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Price { params } => commands::price::run(&params, &config, &mut out)?,
        Commands::Greeks { params } => commands::greeks::run(&params, &config, &mut out)?,
        Commands::Strategies => commands::strategies::run(&config, &mut out)?,
        Commands::Evaluate { strategy, params } => {
            commands::evaluate::run(&strategy, &params, &config, &mut out)?
        }
        Commands::Presets => commands::presets::run(&config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
