//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use renta_analytics::valuation::ValuationResult;
use renta_bonds::cashflows::ShapeKind;

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Prints a valuation report. `solved` picks the value shown in minimal mode.
pub fn print_report(
    result: &ValuationResult,
    solved: Solved,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Minimal => match solved {
            Solved::Yield => println!("{:.6}", result.yield_rate),
            Solved::Price => println!("{:.6}", result.price),
        },
        OutputFormat::Table => {
            print_header(&format!("{} @ {}", result.ticker, result.settlement));
            print_table(&report_rows(result))?;
        }
        OutputFormat::Csv => print_csv(&report_rows(result))?,
    }
    Ok(())
}

/// Which side of the valuation was solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solved {
    /// Yield from price.
    Yield,
    /// Price from yield.
    Price,
}

fn report_rows(r: &ValuationResult) -> Vec<KeyValue> {
    let shape = match r.shape {
        ShapeKind::ZeroCoupon => "Zero coupon (simple yield)",
        ShapeKind::Amortizing => "Amortizing (effective yield)",
    };
    let mut rows = vec![
        KeyValue::new("Shape", shape),
        KeyValue::new("Maturity", r.maturity.to_string()),
        KeyValue::new("Day Count", r.day_count.to_string()),
        KeyValue::from_percent("Yield", r.yield_rate),
        KeyValue::from_percent("TNA", r.tna),
        KeyValue::from_f64("Price", r.price, 4),
        KeyValue::from_f64("Modified Duration", r.modified_duration, 4),
        KeyValue::from_f64("Convexity", r.convexity, 4),
        KeyValue::new("Accrued Days", r.accrued_days.to_string()),
        KeyValue::from_percent("Current Coupon", r.current_coupon),
        KeyValue::from_f64("Residual", r.residual, 4),
        KeyValue::from_f64("Accrued Interest", r.accrued_interest, 6),
        KeyValue::from_f64("Technical Value", r.technical_value, 6),
        KeyValue::from_f64("Parity", r.parity, 4),
        KeyValue::new(
            "Last Coupon",
            r.last_coupon.map_or_else(|| "-".to_string(), |d| d.to_string()),
        ),
        KeyValue::from_f64("Last Amortization", r.last_amortization, 4),
    ];
    if let (Some(issue), Some(settle)) = (r.index.issue_reference, r.index.settlement_reference) {
        rows.push(KeyValue::new("Index Dates", format!("{issue} -> {settle}")));
        rows.push(KeyValue::from_f64("Index Ratio", r.index.ratio, 6));
    }
    rows
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair with fixed precision.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format!("{:.prec$}", value, prec = precision))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format!("{:.4}%", value * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_formatting() {
        assert_eq!(KeyValue::from_percent("Yield", 0.123456).value, "12.3456%");
        assert_eq!(KeyValue::from_f64("Price", 99.5, 2).value, "99.50");
    }
}
