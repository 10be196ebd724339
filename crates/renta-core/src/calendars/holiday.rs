//! Calendar built from an explicit holiday list.

use std::collections::BTreeSet;

use super::Calendar;
use crate::error::CoreResult;
use crate::types::Date;

/// Weekend calendar plus an explicit set of holidays.
///
/// # Example
///
/// ```
/// use renta_core::calendars::{Calendar, HolidayCalendar};
/// use renta_core::types::Date;
///
/// let new_year = Date::from_ymd(2025, 1, 1).unwrap();
/// let cal = HolidayCalendar::from_dates("Local", [new_year]);
///
/// assert!(!cal.is_business_day(new_year));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Creates an empty calendar (weekends only).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Creates a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        let mut cal = Self::new(name);
        cal.add_holidays(holidays);
        cal
    }

    /// Creates a calendar from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` for the first unparseable entry.
    pub fn from_strs<'a>(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = &'a str>,
    ) -> CoreResult<Self> {
        let dates = holidays
            .into_iter()
            .map(Date::parse)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self::from_dates(name, dates))
    }

    /// Adds a holiday.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Adds several holidays.
    pub fn add_holidays(&mut self, dates: impl IntoIterator<Item = Date>) {
        self.holidays.extend(dates);
    }

    /// Number of holidays registered.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the date was registered as a holiday.
    pub fn is_holiday_date(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_holidays_are_skipped() {
        // Tuesday 2024-07-09 is a holiday
        let cal = HolidayCalendar::from_dates("Local", [date(2024, 7, 9)]);

        assert!(!cal.is_business_day(date(2024, 7, 9)));
        assert_eq!(cal.add_business_days(date(2024, 7, 10), -1), date(2024, 7, 8));
        assert_eq!(cal.add_business_days(date(2024, 7, 10), -2), date(2024, 7, 5));
    }

    #[test]
    fn test_from_strs() {
        let cal = HolidayCalendar::from_strs("Local", ["2024-12-25", "2025-01-01"]).unwrap();
        assert_eq!(cal.holiday_count(), 2);
        assert!(cal.is_holiday_date(date(2025, 1, 1)));
        assert_eq!(cal.name(), "Local");

        assert!(HolidayCalendar::from_strs("Bad", ["2024-13-01"]).is_err());
    }

    #[test]
    fn test_duplicate_holidays_collapse() {
        let mut cal = HolidayCalendar::new("Local");
        cal.add_holiday(date(2024, 5, 1));
        cal.add_holiday(date(2024, 5, 1));
        assert_eq!(cal.holiday_count(), 1);
    }
}
