//! Price command: price and full report from a yield.

use anyhow::Result;
use clap::Args;

use renta_analytics::valuation::Quote;

use crate::cli::OutputFormat;
use crate::commands::ValuationArgs;
use crate::config::RentaConfig;
use crate::context;
use crate::output::{print_report, Solved};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub valuation: ValuationArgs,

    /// Yield (decimal, e.g. 0.25 for 25%). Effective annual for amortizing
    /// bonds, simple for a single remaining cashflow.
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,
}

/// Execute the price command.
pub async fn execute(args: PriceArgs, config: &RentaConfig, format: OutputFormat) -> Result<()> {
    let request = args.valuation.request(Quote::Rate(args.rate), config)?;

    let engine = context::load_all(config).await?;
    let result = engine.value(&request)?;

    print_report(&result, Solved::Price, format)
}
