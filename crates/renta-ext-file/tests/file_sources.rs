//! File source tests against real files on disk.

use std::fs;

use tempfile::TempDir;

use renta_core::daycounts::DayCountConvention;
use renta_core::types::Date;
use renta_ext_file::*;
use renta_traits::{IndexSeriesSource, InstrumentSource, TraitError};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn write_catalog(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let bonds = dir.path().join("bonds.csv");
    let cashflows = dir.path().join("cashflows.csv");
    fs::write(
        &bonds,
        "ticker,issue_date,maturity,coupon,index,offset,day_count_conv\n\
         AM26,2024-03-15,2026-03-15,0.10,,,3\n\
         ZC25,2024-01-01,2025-12-31,0,CER,10,2\n",
    )
    .unwrap();
    fs::write(
        &cashflows,
        "ticker,seq,date,rate,amort,residual,amount\n\
         AM26,1,2024-09-15,0.10,25,75,30\n\
         AM26,2,2025-03-15,0.10,25,50,28.75\n\
         AM26,3,2025-09-15,0.10,25,25,27.5\n\
         AM26,4,2026-03-15,0.10,25,0,26.25\n\
         ZC25,1,2025-12-31,0,100,0,100\n",
    )
    .unwrap();
    (bonds, cashflows)
}

#[tokio::test]
async fn test_csv_source_loads_instruments() {
    let dir = TempDir::new().unwrap();
    let (bonds, cashflows) = write_catalog(&dir);

    let source = CsvInstrumentSource::new(&bonds, &cashflows);
    let instruments = source.load_instruments().await.unwrap();

    assert_eq!(instruments.len(), 2);
    assert_eq!(instruments[0].ticker, "AM26");
    assert_eq!(instruments[0].cashflows.len(), 4);
    assert_eq!(instruments[0].day_count, DayCountConvention::ActAct);
    assert_eq!(instruments[1].index.as_deref(), Some("CER"));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let source = CsvInstrumentSource::new(dir.path().join("nope.csv"), dir.path().join("x.csv"));

    let err = source.load_instruments().await.unwrap_err();
    assert!(matches!(err, TraitError::IoError(_)));
}

#[test]
fn test_export_then_reload() {
    let dir = TempDir::new().unwrap();
    let (bonds, cashflows) = write_catalog(&dir);
    let (instruments, _) = CsvInstrumentSource::new(&bonds, &cashflows).load().unwrap();

    let out = dir.path().join("export");
    let settlement = date(2025, 3, 15);
    let (bonds_out, cashflows_out) =
        export_schedule_to_dir(&out, &instruments, Some(settlement)).unwrap();

    let (reloaded, summary) = CsvInstrumentSource::new(bonds_out, cashflows_out)
        .load()
        .unwrap();
    assert_eq!(summary.loaded, 2);
    assert!(summary.skipped.is_empty());

    // The payment on the settlement date is kept
    let am26 = &reloaded[0];
    assert_eq!(am26.cashflows.len(), 3);
    assert_eq!(am26.cashflows[0].date, settlement);
    assert_eq!(am26.cashflows[0].residual, 50.0);
    assert_eq!(am26.day_count, instruments[0].day_count);

    let zc = &reloaded[1];
    assert_eq!(zc.offset, 10);
    assert_eq!(zc.cashflows[0].amount, 100.0);
}

#[tokio::test]
async fn test_index_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cer.csv");
    fs::write(&path, "date,value\n2025-01-02,500.1\n2025-01-03,500.4\n").unwrap();

    let (_, index) = create_file_sources(dir.path().join("b"), dir.path().join("c"), &path);
    let series = index.load_series().await.unwrap();

    assert_eq!(series.name(), "CER");
    assert_eq!(series.len(), 2);
    assert_eq!(series.last().unwrap().date, date(2025, 1, 3));
}

#[tokio::test]
async fn test_json_seed_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(
        &path,
        r#"[{"id": "b-1", "ticker": "zc25", "issue_date": "2024-01-01",
             "maturity": "2025-01-01", "coupon": 0.0,
             "cashflows": [{"date": "2025-01-01", "rate": 0.0, "amortization": 100.0,
                            "residual": 0.0, "amount": 100.0}]}]"#,
    )
    .unwrap();

    let instruments = JsonInstrumentSource::new(&path).load_instruments().await.unwrap();
    assert_eq!(instruments.len(), 1);
    assert_eq!(instruments[0].id, "b-1");
    assert_eq!(instruments[0].ticker, "ZC25");
}

#[test]
fn test_holiday_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ar.csv");
    fs::write(&path, "date\n2025-05-01\n2025-05-25\n").unwrap();

    let calendar = load_holiday_calendar(&path).unwrap();
    assert_eq!(calendar.holiday_count(), 2);
}
