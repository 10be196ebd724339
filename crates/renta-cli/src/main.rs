//! Renta CLI - fixed income valuation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Yield and technical value from a market price
//! renta --bonds-csv data/bonds.csv --cashflows-csv data/cashflows.csv \
//!     yield TX26 --price 1050.5 --settlement 2025-03-14
//!
//! # Price from a yield, data files from renta.toml
//! renta price TX26 --rate 0.08
//!
//! # Remaining payments, or export the catalog from a date on
//! renta schedule TX26 --settlement 2025-03-14
//! renta schedule --export out/ --settlement 2025-03-14
//!
//! # Index coefficient at a date
//! renta index --date 2025-06-30 --extend-rate 0.3
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod output;

use cli::{Cli, Commands};
use config::RentaConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "error" } else { "info,renta=debug" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = RentaConfig::load(cli.config.as_deref())?;
    config.apply(&cli.data);

    let format = cli.format;

    match cli.command {
        Commands::Yield(args) => commands::yields::execute(args, &config, format).await?,
        Commands::Price(args) => commands::price::execute(args, &config, format).await?,
        Commands::Schedule(args) => commands::schedule::execute(args, &config, format).await?,
        Commands::Bonds(args) => commands::bonds::execute(args, &config, format).await?,
        Commands::Index(args) => commands::index::execute(args, &config, format).await?,
    }

    Ok(())
}
