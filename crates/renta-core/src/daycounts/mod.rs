//! Day count conventions.
//!
//! A day count convention turns a date pair into a year fraction for
//! interest accrual. Instruments carry the convention as an integer tag:
//!
//! | Tag | Convention | Type |
//! |-----|------------|------|
//! | 1 | 30/360 | [`Thirty360`] |
//! | 2 | Actual/365 | [`Act365`] |
//! | 3 | Actual/Actual | [`ActAct`] |
//! | 4 | Actual/360 | [`Act360`] |
//!
//! Any other tag falls back to 30/360.
//!
//! # Usage
//!
//! ```rust
//! use renta_core::daycounts::{DayCount, DayCountConvention, Thirty360};
//! use renta_core::types::Date;
//!
//! let start = Date::from_ymd(2024, 1, 31).unwrap();
//! let end = Date::from_ymd(2024, 3, 31).unwrap();
//!
//! assert_eq!(Thirty360.day_count(start, end), 60);
//! assert_eq!(DayCountConvention::from_tag(9), DayCountConvention::Thirty360);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use actact::ActAct;
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Day count convention selected by an instrument's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum DayCountConvention {
    /// 30/360 (tag 1), also the fallback for unknown tags.
    #[default]
    Thirty360,
    /// Actual/365 (tag 2).
    Act365,
    /// Actual/Actual (tag 3).
    ActAct,
    /// Actual/360 (tag 4).
    Act360,
}

impl DayCountConvention {
    /// Resolves an instrument tag.
    ///
    /// Unknown tags never fail: they resolve to 30/360 and are logged.
    #[must_use]
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            1 => DayCountConvention::Thirty360,
            2 => DayCountConvention::Act365,
            3 => DayCountConvention::ActAct,
            4 => DayCountConvention::Act360,
            0 => {
                log::debug!("day count tag 0, using 30/360");
                DayCountConvention::Thirty360
            }
            other => {
                log::warn!("unknown day count tag {other}, falling back to 30/360");
                DayCountConvention::Thirty360
            }
        }
    }

    /// Returns the instrument tag for this convention.
    #[must_use]
    pub const fn tag(&self) -> i32 {
        match self {
            DayCountConvention::Thirty360 => 1,
            DayCountConvention::Act365 => 2,
            DayCountConvention::ActAct => 3,
            DayCountConvention::Act360 => 4,
        }
    }

    /// Returns true if `tag` names a known convention.
    #[must_use]
    pub const fn is_known_tag(tag: i32) -> bool {
        matches!(tag, 1..=4)
    }

    /// Returns the convention's implementation.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Thirty360 => &Thirty360,
            DayCountConvention::Act365 => &Act365,
            DayCountConvention::ActAct => &ActAct,
            DayCountConvention::Act360 => &Act360,
        }
    }

    /// Returns the name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360,
            DayCountConvention::Act365,
            DayCountConvention::ActAct,
            DayCountConvention::Act360,
        ]
    }

    /// Year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.to_day_count().year_fraction(start, end)
    }

    /// Day count between two dates under this convention.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        self.to_day_count().day_count(start, end)
    }
}

impl From<i32> for DayCountConvention {
    fn from(tag: i32) -> Self {
        DayCountConvention::from_tag(tag)
    }
}

impl From<DayCountConvention> for i32 {
    fn from(convention: DayCountConvention) -> Self {
        convention.tag()
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a convention from its name or its numeric tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "1" | "30/360" | "THIRTY360" | "BOND" => Ok(DayCountConvention::Thirty360),
            "2" | "ACT/365" | "ACTUAL/365" | "ACT365" => Ok(DayCountConvention::Act365),
            "3" | "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" => Ok(DayCountConvention::ActAct),
            "4" | "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}

/// Number of days in the calendar year of `date` (365 or 366).
#[must_use]
pub fn days_in_year(date: Date) -> u32 {
    date.days_in_year()
}

/// Integer 30/360 day count between two dates.
#[must_use]
pub fn days_360(start: Date, end: Date) -> i64 {
    Thirty360.day_count(start, end)
}
