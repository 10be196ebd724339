//! Holiday calendar files.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use renta_core::calendars::HolidayCalendar;
use renta_core::types::Date;

use crate::error::{FileSourceError, FileSourceResult};
use crate::reader::{csv_reader, open};

const HOLIDAYS_FILE: &str = "holidays.csv";

#[derive(Debug, Deserialize)]
struct HolidayRecord {
    date: String,
}

/// Parses a CSV with a `date` column into a holiday calendar.
pub fn parse_holidays<R: Read>(input: R, name: &str) -> FileSourceResult<HolidayCalendar> {
    let mut reader = csv_reader(input, HOLIDAYS_FILE, &["date"])?;
    let mut calendar = HolidayCalendar::new(name);

    for (i, result) in reader.deserialize::<HolidayRecord>().enumerate() {
        let record = result?;
        if record.date.is_empty() {
            continue;
        }
        let date = Date::parse(&record.date).map_err(|e| {
            FileSourceError::invalid_row(HOLIDAYS_FILE, i as u64 + 2, e.to_string())
        })?;
        calendar.add_holiday(date);
    }

    Ok(calendar)
}

/// Loads a holiday calendar named after the file stem.
pub fn load_holiday_calendar(path: impl AsRef<Path>) -> FileSourceResult<HolidayCalendar> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map_or_else(|| "holidays".to_string(), |s| s.to_string_lossy().into_owned());
    let calendar = parse_holidays(open(path)?, &name)?;
    tracing::info!(
        calendar = %name,
        holidays = calendar.holiday_count(),
        "Holiday calendar loaded"
    );
    Ok(calendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use renta_core::calendars::Calendar;

    #[test]
    fn test_parse_holidays() {
        let csv = "date,description\n2025-03-24,Memoria\n2025-04-02,Malvinas\n\n";
        let cal = parse_holidays(csv.as_bytes(), "AR").unwrap();
        assert_eq!(cal.holiday_count(), 2);
        assert!(!cal.is_business_day(Date::from_ymd(2025, 3, 24).unwrap()));
        assert!(cal.is_business_day(Date::from_ymd(2025, 3, 25).unwrap()));
    }
}
