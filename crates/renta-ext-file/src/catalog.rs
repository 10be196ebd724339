//! File-based instrument catalog sources.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use renta_bonds::cashflows::CashflowEvent;
use renta_bonds::instruments::Instrument;
use renta_core::daycounts::DayCountConvention;
use renta_core::types::Date;
use renta_traits::{InstrumentSource, TraitError};

use crate::error::{FileSourceError, FileSourceResult};
use crate::reader::{csv_reader, open};

// =============================================================================
// LOAD SUMMARY
// =============================================================================

/// An instrument left out of a load, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedInstrument {
    /// Ticker as written in the file.
    pub ticker: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Outcome of a catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Instruments accepted.
    pub loaded: usize,
    /// Rows marked `active=false`.
    pub inactive: usize,
    /// Instruments rejected by validation.
    pub skipped: Vec<SkippedInstrument>,
    /// Cashflow tickers with no matching bond row.
    pub orphaned_cashflows: Vec<String>,
}

impl LoadSummary {
    fn skip(&mut self, ticker: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedInstrument {
            ticker: ticker.to_string(),
            reason: reason.into(),
        });
    }

    /// Logs the summary: one warning per skipped instrument.
    pub fn log(&self, source: &str) {
        for skipped in &self.skipped {
            warn!(source, ticker = %skipped.ticker, reason = %skipped.reason, "Skipped instrument");
        }
        if !self.orphaned_cashflows.is_empty() {
            warn!(source, tickers = ?self.orphaned_cashflows, "Cashflows without a bond row");
        }
        info!(
            source,
            loaded = self.loaded,
            inactive = self.inactive,
            skipped = self.skipped.len(),
            "Catalog loaded"
        );
    }
}

// =============================================================================
// CSV CATALOG
// =============================================================================

/// CSV record for bonds.
#[derive(Debug, Deserialize)]
struct BondRecord {
    ticker: String,
    issue_date: String,
    maturity: String,
    coupon: f64,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    index: Option<String>,
    #[serde(default)]
    offset: Option<String>,
    #[serde(default)]
    day_count_conv: Option<String>,
    #[serde(default)]
    active: Option<String>,
}

/// CSV record for cashflows.
#[derive(Debug, Deserialize)]
struct CashflowRecord {
    ticker: String,
    date: String,
    rate: f64,
    amort: f64,
    residual: f64,
    amount: f64,
}

const BONDS_FILE: &str = "bonds.csv";
const CASHFLOWS_FILE: &str = "cashflows.csv";

/// Required `bonds.csv` columns.
pub const BOND_COLUMNS: [&str; 4] = ["ticker", "issue_date", "maturity", "coupon"];

/// Required `cashflows.csv` columns.
pub const CASHFLOW_COLUMNS: [&str; 6] = ["ticker", "date", "rate", "amort", "residual", "amount"];

fn parse_date(file: &'static str, line: u64, field: &str, value: &str) -> FileSourceResult<Date> {
    Date::parse(value)
        .map_err(|e| FileSourceError::invalid_row(file, line, format!("{field}: {e}")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_cashflows<R: Read>(input: R) -> FileSourceResult<HashMap<String, Vec<CashflowEvent>>> {
    let mut reader = csv_reader(input, CASHFLOWS_FILE, &CASHFLOW_COLUMNS)?;
    let mut flows: HashMap<String, Vec<CashflowEvent>> = HashMap::new();

    for (i, result) in reader.deserialize::<CashflowRecord>().enumerate() {
        let line = i as u64 + 2;
        let record = result?;
        let ticker = record.ticker.to_uppercase();
        if ticker.is_empty() {
            continue;
        }
        let date = parse_date(CASHFLOWS_FILE, line, "date", &record.date)?;
        flows.entry(ticker).or_default().push(CashflowEvent::new(
            date,
            record.rate,
            record.amort,
            record.residual,
            record.amount,
        ));
    }

    Ok(flows)
}

/// Parses a `bonds.csv` / `cashflows.csv` pair.
///
/// Rows that parse but fail validation (unknown day count tag, no cashflows,
/// maturity before issue, growing residual, duplicate ticker) are skipped and
/// reported in the [`LoadSummary`]. Cashflows are sorted by date per ticker.
///
/// # Errors
///
/// Returns an error for a missing required column or an unparseable row.
pub fn parse_catalog<B: Read, C: Read>(
    bonds: B,
    cashflows: C,
) -> FileSourceResult<(Vec<Instrument>, LoadSummary)> {
    let mut flows = parse_cashflows(cashflows)?;
    let mut reader = csv_reader(bonds, BONDS_FILE, &BOND_COLUMNS)?;

    let mut instruments = Vec::new();
    let mut summary = LoadSummary::default();
    let mut seen = HashSet::new();

    for (i, result) in reader.deserialize::<BondRecord>().enumerate() {
        let line = i as u64 + 2;
        let record = result?;
        let ticker = record.ticker.to_uppercase();
        if ticker.is_empty() {
            continue;
        }

        let issue_date = parse_date(BONDS_FILE, line, "issue_date", &record.issue_date)?;
        let maturity = parse_date(BONDS_FILE, line, "maturity", &record.maturity)?;

        let active = record
            .active
            .as_deref()
            .map(str::to_lowercase)
            .map_or(true, |v| v != "false" && v != "0");
        if !active {
            summary.inactive += 1;
            flows.remove(&ticker);
            continue;
        }

        if !seen.insert(ticker.clone()) {
            summary.skip(&ticker, "duplicate ticker");
            continue;
        }

        let tag = record
            .day_count_conv
            .as_deref()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(1);
        if !DayCountConvention::is_known_tag(tag) {
            summary.skip(&ticker, format!("day_count_conv {tag} is outside 1..=4"));
            flows.remove(&ticker);
            continue;
        }

        let Some(mut events) = flows.remove(&ticker).filter(|f| !f.is_empty()) else {
            summary.skip(&ticker, "missing cashflows");
            continue;
        };
        events.sort_by(|a, b| a.date.cmp(&b.date));

        let offset = record
            .offset
            .as_deref()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(0);
        let id = non_blank(record.id).unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let instrument = Instrument::new(&ticker, issue_date, maturity, record.coupon, events)
            .with_id(id)
            .with_index(non_blank(record.index).unwrap_or_default(), offset)
            .with_day_count(DayCountConvention::from_tag(tag));

        match instrument.validate() {
            Ok(()) => instruments.push(instrument),
            Err(e) => summary.skip(&ticker, e.to_string()),
        }
    }

    let mut orphaned: Vec<String> = flows.into_keys().filter(|t| !seen.contains(t)).collect();
    orphaned.sort();
    summary.orphaned_cashflows = orphaned;
    summary.loaded = instruments.len();

    Ok((instruments, summary))
}

/// CSV-based instrument catalog (`bonds.csv` + `cashflows.csv`).
pub struct CsvInstrumentSource {
    bonds_path: PathBuf,
    cashflows_path: PathBuf,
}

impl CsvInstrumentSource {
    /// Create a new CSV catalog source. Files are read on every load.
    pub fn new(bonds_path: impl AsRef<Path>, cashflows_path: impl AsRef<Path>) -> Self {
        Self {
            bonds_path: bonds_path.as_ref().to_path_buf(),
            cashflows_path: cashflows_path.as_ref().to_path_buf(),
        }
    }

    /// Reads and validates both files.
    pub fn load(&self) -> FileSourceResult<(Vec<Instrument>, LoadSummary)> {
        parse_catalog(open(&self.bonds_path)?, open(&self.cashflows_path)?)
    }
}

#[async_trait]
impl InstrumentSource for CsvInstrumentSource {
    fn name(&self) -> &str {
        "csv"
    }

    async fn load_instruments(&self) -> Result<Vec<Instrument>, TraitError> {
        let (instruments, summary) = self.load()?;
        summary.log(self.name());
        Ok(instruments)
    }
}

// =============================================================================
// JSON SEED
// =============================================================================

/// Parses a JSON array of instruments, applying the same validation as the
/// CSV catalog. Missing ids are generated.
pub fn parse_seed<R: Read>(input: R) -> FileSourceResult<(Vec<Instrument>, LoadSummary)> {
    let raw: Vec<Instrument> = serde_json::from_reader(input)?;
    let mut summary = LoadSummary::default();
    let mut seen = HashSet::new();
    let mut instruments = Vec::with_capacity(raw.len());

    for mut instrument in raw {
        instrument.ticker = instrument.ticker.trim().to_uppercase();
        if instrument.id.trim().is_empty() {
            instrument.id = uuid::Uuid::new_v4().to_string();
        }
        if !seen.insert(instrument.ticker.clone()) {
            summary.skip(&instrument.ticker, "duplicate ticker");
            continue;
        }
        match instrument.validate() {
            Ok(()) => instruments.push(instrument),
            Err(e) => summary.skip(&instrument.ticker, e.to_string()),
        }
    }

    summary.loaded = instruments.len();
    Ok((instruments, summary))
}

/// JSON-based instrument seed.
pub struct JsonInstrumentSource {
    path: PathBuf,
}

impl JsonInstrumentSource {
    /// Create a new JSON seed source.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads and validates the seed file.
    pub fn load(&self) -> FileSourceResult<(Vec<Instrument>, LoadSummary)> {
        parse_seed(open(&self.path)?)
    }
}

#[async_trait]
impl InstrumentSource for JsonInstrumentSource {
    fn name(&self) -> &str {
        "json"
    }

    async fn load_instruments(&self) -> Result<Vec<Instrument>, TraitError> {
        let (instruments, summary) = self.load()?;
        summary.log(self.name());
        Ok(instruments)
    }
}
