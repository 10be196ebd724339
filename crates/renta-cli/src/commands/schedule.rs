//! Schedule command: show one instrument's cashflows or export the catalog.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use renta_bonds::instruments::Instrument;
use renta_ext_file::export_schedule_to_dir;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::config::RentaConfig;
use crate::context;
use crate::output::{print_header, print_output, print_success, print_warning};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Instrument ticker. Required unless exporting.
    pub ticker: Option<String>,

    /// Only payments on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub settlement: Option<String>,

    /// Write bonds.csv and cashflows.csv into this directory
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "#")]
    seq: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Rate")]
    rate: f64,
    #[tabled(rename = "Amortization")]
    amort: f64,
    #[tabled(rename = "Residual")]
    residual: f64,
    #[tabled(rename = "Amount")]
    amount: f64,
}

/// Execute the schedule command.
pub async fn execute(args: ScheduleArgs, config: &RentaConfig, format: OutputFormat) -> Result<()> {
    let settlement = args.settlement.as_deref().map(parse_date).transpose()?;

    let engine = context::build_engine(config)?;
    context::load_catalog(&engine, config).await?;

    if let Some(dir) = &args.export {
        let catalog = engine.catalog();
        let instruments: Vec<Arc<Instrument>> = match &args.ticker {
            Some(ticker) => vec![engine.instrument(ticker)?],
            None => catalog.instruments(),
        };
        let (bonds, cashflows) =
            export_schedule_to_dir(dir, instruments.iter().map(|b| &**b), settlement)?;
        print_success(&format!(
            "Exported {} instruments to {} and {}",
            instruments.len(),
            bonds.display(),
            cashflows.display()
        ));
        return Ok(());
    }

    let Some(ticker) = &args.ticker else {
        anyhow::bail!("a ticker is required unless --export is given");
    };

    let events = engine.schedule(ticker, settlement)?;
    if events.is_empty() {
        print_warning(&format!("{ticker} has no payments left"));
    }

    let rows: Vec<ScheduleRow> = events
        .iter()
        .enumerate()
        .map(|(i, e)| ScheduleRow {
            seq: i + 1,
            date: e.date.to_string(),
            rate: e.rate,
            amort: e.amortization,
            residual: e.residual,
            amount: e.amount,
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("{} cashflows", ticker.to_uppercase()));
    }
    print_output(&rows, format)
}
