//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BondsArgs, IndexArgs, PriceArgs, ScheduleArgs, YieldArgs};

/// Renta - fixed income valuation from price or rate
#[derive(Parser)]
#[command(name = "renta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (TOML)
    #[arg(short, long, env = "RENTA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Data file overrides. Each one replaces the matching `[data]` entry.
#[derive(clap::Args, Debug, Default)]
pub struct DataArgs {
    /// Bonds CSV file
    #[arg(long, global = true)]
    pub bonds_csv: Option<PathBuf>,

    /// Cashflows CSV file
    #[arg(long, global = true)]
    pub cashflows_csv: Option<PathBuf>,

    /// JSON instrument seed (used instead of the CSV pair)
    #[arg(long, global = true)]
    pub seed_json: Option<PathBuf>,

    /// Index coefficient CSV file (date,value)
    #[arg(long, global = true)]
    pub index_csv: Option<PathBuf>,

    /// Holiday CSV file (date)
    #[arg(long, global = true)]
    pub holidays_csv: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Yield, duration and technical value from a market price
    Yield(YieldArgs),

    /// Price and report from a yield
    Price(PriceArgs),

    /// Show or export cashflow schedules
    Schedule(ScheduleArgs),

    /// List instruments in the catalog
    Bonds(BondsArgs),

    /// Show the index series or the coefficient at a date
    Index(IndexArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
