//! Index command: show the loaded series or the coefficient at a date.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::config::RentaConfig;
use crate::context;
use crate::error::CliError;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the index command.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Coefficient at this date (YYYY-MM-DD), extrapolated past the last sample
    #[arg(short, long)]
    pub date: Option<String>,

    /// Annual extrapolation rate. Overrides config.
    #[arg(long)]
    pub extend_rate: Option<f64>,

    /// Number of trailing samples to show
    #[arg(long, default_value = "10")]
    pub tail: usize,
}

#[derive(Debug, Serialize, Tabled)]
struct SampleRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Value")]
    value: f64,
}

/// Execute the index command.
pub async fn execute(args: IndexArgs, config: &RentaConfig, format: OutputFormat) -> Result<()> {
    let engine = context::build_engine(config)?;
    if !context::load_index(&engine, config).await? {
        return Err(CliError::MissingData("index-csv").into());
    }
    let snapshot = engine.index();
    let Some(series) = snapshot.series() else {
        return Err(CliError::MissingData("index-csv").into());
    };

    if let Some(date) = &args.date {
        let date = parse_date(date)?;
        let rate = args.extend_rate.unwrap_or(config.valuation.extend_rate);
        let value = series.lookup_with(date, rate, engine.basis())?;
        let source = if series.exact(date).is_some() {
            "exact"
        } else {
            "extrapolated"
        };

        if format == OutputFormat::Minimal {
            println!("{value:.6}");
            return Ok(());
        }
        let rows = vec![
            KeyValue::new("Series", series.name()),
            KeyValue::new("Date", date.to_string()),
            KeyValue::from_f64("Coefficient", value, 6),
            KeyValue::new("Source", source),
            KeyValue::new("Basis", engine.basis().to_string()),
        ];
        return print_output(&rows, format);
    }

    let skip = series.len().saturating_sub(args.tail);
    let rows: Vec<SampleRow> = series.samples()[skip..]
        .iter()
        .map(|s| SampleRow {
            date: s.date.to_string(),
            value: s.value,
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("{} ({} samples)", series.name(), series.len()));
    }
    print_output(&rows, format)
}
