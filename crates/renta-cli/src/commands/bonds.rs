//! Bonds command: list the catalog.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::config::RentaConfig;
use crate::context;
use crate::output::print_output;

/// Arguments for the bonds command.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Only index-linked instruments
    #[arg(long)]
    pub indexed: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct BondRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Issue")]
    issue_date: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Coupon")]
    coupon: f64,
    #[tabled(rename = "Index")]
    index: String,
    #[tabled(rename = "Offset")]
    offset: i32,
    #[tabled(rename = "Day Count")]
    day_count: String,
    #[tabled(rename = "Payments")]
    payments: usize,
}

/// Execute the bonds command.
pub async fn execute(args: BondsArgs, config: &RentaConfig, format: OutputFormat) -> Result<()> {
    let engine = context::build_engine(config)?;
    context::load_catalog(&engine, config).await?;

    let rows: Vec<BondRow> = engine
        .catalog()
        .instruments()
        .into_iter()
        .filter(|b| !args.indexed || b.is_indexed())
        .map(|b| BondRow {
            ticker: b.ticker.clone(),
            issue_date: b.issue_date.to_string(),
            maturity: b.maturity.to_string(),
            coupon: b.coupon,
            index: b.index.clone().unwrap_or_default(),
            offset: b.offset,
            day_count: b.day_count.to_string(),
            payments: b.cashflows.len(),
        })
        .collect();

    if format == OutputFormat::Minimal {
        for row in &rows {
            println!("{}", row.ticker);
        }
        return Ok(());
    }
    print_output(&rows, format)
}
