//! Schedule export in the two-file catalog layout.
//!
//! The output of [`write_schedule`] reads back through
//! [`parse_catalog`](crate::parse_catalog).

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use renta_bonds::cashflows::remaining_events;
use renta_bonds::instruments::Instrument;
use renta_core::types::Date;

use crate::error::{FileSourceError, FileSourceResult};

#[derive(Debug, Serialize)]
struct BondRow<'a> {
    ticker: &'a str,
    issue_date: Date,
    maturity: Date,
    coupon: f64,
    index: &'a str,
    offset: i32,
    day_count_conv: i32,
}

#[derive(Debug, Serialize)]
struct CashflowRow<'a> {
    ticker: &'a str,
    seq: usize,
    date: Date,
    rate: f64,
    amort: f64,
    residual: f64,
    amount: f64,
}

/// Rows written by an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleExport {
    /// Bond rows.
    pub bonds: usize,
    /// Cashflow rows.
    pub cashflows: usize,
}

/// Writes instruments as `bonds.csv` and `cashflows.csv` content.
///
/// With a settlement date, only events dated on or after it are written and
/// `seq` restarts at 1 for the first retained event. An instrument with no
/// retained events still gets its bond row.
pub fn write_schedule<'a, B: Write, C: Write>(
    instruments: impl IntoIterator<Item = &'a Instrument>,
    settlement: Option<Date>,
    bonds_out: B,
    cashflows_out: C,
) -> FileSourceResult<ScheduleExport> {
    let mut bonds = csv::Writer::from_writer(bonds_out);
    let mut cashflows = csv::Writer::from_writer(cashflows_out);
    let mut written = ScheduleExport::default();

    for instrument in instruments {
        bonds.serialize(BondRow {
            ticker: &instrument.ticker,
            issue_date: instrument.issue_date,
            maturity: instrument.maturity,
            coupon: instrument.coupon,
            index: instrument.index.as_deref().unwrap_or_default(),
            offset: instrument.offset,
            day_count_conv: instrument.day_count.tag(),
        })?;
        written.bonds += 1;

        let events = match settlement {
            Some(date) => remaining_events(&instrument.cashflows, date),
            None => &instrument.cashflows[..],
        };
        for (i, event) in events.iter().enumerate() {
            cashflows.serialize(CashflowRow {
                ticker: &instrument.ticker,
                seq: i + 1,
                date: event.date,
                rate: event.rate,
                amort: event.amortization,
                residual: event.residual,
                amount: event.amount,
            })?;
            written.cashflows += 1;
        }
    }

    bonds.flush().map_err(csv::Error::from)?;
    cashflows.flush().map_err(csv::Error::from)?;
    Ok(written)
}

/// Writes `bonds.csv` and `cashflows.csv` into `dir`, creating it if needed.
/// Returns the two file paths.
pub fn export_schedule_to_dir<'a>(
    dir: impl AsRef<Path>,
    instruments: impl IntoIterator<Item = &'a Instrument>,
    settlement: Option<Date>,
) -> FileSourceResult<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| FileSourceError::io(dir, e))?;

    let bonds_path = dir.join("bonds.csv");
    let cashflows_path = dir.join("cashflows.csv");
    let bonds = File::create(&bonds_path).map_err(|e| FileSourceError::io(&bonds_path, e))?;
    let cashflows =
        File::create(&cashflows_path).map_err(|e| FileSourceError::io(&cashflows_path, e))?;

    let written = write_schedule(instruments, settlement, bonds, cashflows)?;
    tracing::info!(
        dir = %dir.display(),
        bonds = written.bonds,
        cashflows = written.cashflows,
        "Schedule exported"
    );
    Ok((bonds_path, cashflows_path))
}
