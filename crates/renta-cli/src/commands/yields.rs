//! Yield command: yield and full report from a market price.

use anyhow::Result;
use clap::Args;

use renta_analytics::valuation::Quote;

use crate::cli::OutputFormat;
use crate::commands::ValuationArgs;
use crate::config::RentaConfig;
use crate::context;
use crate::error::CliError;
use crate::output::{print_report, Solved};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub valuation: ValuationArgs,

    /// Market price per 100 nominal (index-adjusted)
    #[arg(short, long)]
    pub price: f64,
}

/// Execute the yield command.
pub async fn execute(args: YieldArgs, config: &RentaConfig, format: OutputFormat) -> Result<()> {
    if !(args.price.is_finite() && args.price > 0.0) {
        return Err(CliError::InvalidPrice(args.price).into());
    }
    let request = args.valuation.request(Quote::Price(args.price), config)?;

    let engine = context::load_all(config).await?;
    let result = engine.value(&request)?;

    print_report(&result, Solved::Yield, format)
}
