//! Actual/Actual day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual day count convention.
///
/// # Rules
///
/// - Spans shorter than 365 days: actual days divided by the length of the
///   start date's calendar year.
/// - Longer spans: walk calendar year by calendar year and accumulate
///   `days_in_segment / days_in_that_year`. For these spans the result equals
///   the ISDA year split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActAct;

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = start.days_between(&end);
        if days < 365 {
            return days as f64 / f64::from(start.days_in_year());
        }

        let mut total = 0.0;
        let mut current = start;
        while current < end {
            let year_end = current.start_of_next_year();
            let segment_end = year_end.min(end);
            total +=
                current.days_between(&segment_end) as f64 / f64::from(current.days_in_year());
            current = year_end;
        }
        total
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
