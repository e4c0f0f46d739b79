// Copyright (c) 2024 Botho Foundation

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tier_pricing::Decimal;
use tracing_subscriber::EnvFilter;

use campaign_pricing::{commands, config};

#[derive(Parser)]
#[command(name = "campaign-pricing")]
#[command(about = "Creator tier lookups and campaign price quotes", long_about = None)]
struct Cli {
    /// Path to config file (default: ~/.campaign-pricing/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file containing the standard tier table
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Show the tier for a subscriber count
    Tier {
        /// Subscriber count
        #[arg(allow_negative_numbers = true)]
        subscribers: i64,
    },

    /// Show a tier by level
    Lookup {
        /// Tier level (1 is the lowest)
        level: u32,
    },

    /// Show the active tier table
    Tiers,

    /// Quote a campaign for a creator's subscriber count
    Quote {
        /// Subscriber count
        #[arg(allow_negative_numbers = true)]
        subscribers: i64,

        /// Currency tag shown with the amounts
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show the platform fee breakdown for a base price
    Fee {
        /// Base price, e.g. 99.99
        #[arg(allow_negative_numbers = true)]
        base_price: Decimal,

        /// Currency tag shown with the amounts
        #[arg(long)]
        currency: Option<String>,
    },

    /// Check a creator against the subscriber requirement
    Eligibility {
        /// Creator's current subscriber count
        #[arg(allow_negative_numbers = true)]
        subscribers: i64,

        /// Override the configured requirement
        #[arg(long)]
        min: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize simple logging; RUST_LOG takes precedence when set
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let explicit_config = cli.config.is_some();
    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);

    let load_config = || config::Config::load_or_default(&config_path, explicit_config);

    // Execute command
    match cli.command {
        Commands::Init { force } => commands::init::run(&config_path, force),
        Commands::Tier { subscribers } => commands::tier::run(&load_config()?, subscribers),
        Commands::Lookup { level } => commands::tier::lookup(&load_config()?, level),
        Commands::Tiers => commands::tier::list(&load_config()?),
        Commands::Quote { subscribers, currency } => {
            commands::quote::run(&load_config()?, subscribers, currency.as_deref())
        }
        Commands::Fee { base_price, currency } => {
            commands::quote::fee(&load_config()?, base_price, currency.as_deref())
        }
        Commands::Eligibility { subscribers, min } => {
            commands::eligibility::run(&load_config()?, subscribers, min)
        }
    }
}
