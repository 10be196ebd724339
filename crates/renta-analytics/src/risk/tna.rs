//! Nominal annual rate (TNA) on a 30/360 basis.

use renta_bonds::cashflows::BondShape;
use renta_core::daycounts::days_360;
use renta_core::types::Date;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Nominal annual rate for the remaining schedule.
///
/// - zero coupon: `(A / P - 1) * 360 / d`, `d = days_360(settlement, maturity)`
/// - amortizing: `((1 + y)^(d/360) - 1) * 360 / d`, with `d` the 30/360 days
///   between the first two remaining payments
///
/// # Errors
///
/// Returns `AnalyticsError::ZeroPriceDivision` if `price` or `d` is zero.
pub fn tna(
    shape: &BondShape<'_>,
    yield_rate: f64,
    price: f64,
    settlement: Date,
) -> AnalyticsResult<f64> {
    if price == 0.0 {
        return Err(AnalyticsError::zero_division("TNA price"));
    }

    match shape {
        BondShape::ZeroCoupon {
            maturity, amount, ..
        } => {
            let days = days_360(settlement, *maturity);
            if days == 0 {
                return Err(AnalyticsError::zero_division(
                    "TNA 30/360 days from settlement to maturity",
                ));
            }
            Ok((amount / price - 1.0) * (360.0 / days as f64))
        }
        BondShape::Amortizing { events } => {
            let days = days_360(events[0].date, events[1].date);
            if days == 0 {
                return Err(AnalyticsError::zero_division(
                    "TNA 30/360 days between first two payments",
                ));
            }
            let period = days as f64 / 360.0;
            Ok(((1.0 + yield_rate).powf(period) - 1.0) * (360.0 / days as f64))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use renta_bonds::cashflows::CashflowEvent;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_coupon_tna() {
        let events = [CashflowEvent::new(date(2025, 1, 1), 0.0, 100.0, 0.0, 100.0)];
        let settlement = date(2024, 7, 1);
        let shape = BondShape::classify(&events, settlement).unwrap();

        let value = tna(&shape, 0.0, 90.0, settlement).unwrap();
        // days_360 = 180
        assert_relative_eq!(value, (100.0 / 90.0 - 1.0) * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_amortizing_tna_semiannual() {
        let events = [
            CashflowEvent::new(date(2024, 7, 1), 0.05, 50.0, 50.0, 52.5),
            CashflowEvent::new(date(2025, 1, 1), 0.05, 50.0, 0.0, 51.25),
        ];
        let settlement = date(2024, 3, 1);
        let shape = BondShape::classify(&events, settlement).unwrap();

        let value = tna(&shape, 0.1025, 100.0, settlement).unwrap();
        // 180 days: (1.1025^0.5 - 1) * 2 = 0.10
        assert_relative_eq!(value, 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_price() {
        let events = [CashflowEvent::new(date(2025, 1, 1), 0.0, 100.0, 0.0, 100.0)];
        let shape = BondShape::classify(&events, date(2024, 7, 1)).unwrap();
        let err = tna(&shape, 0.1, 0.0, date(2024, 7, 1)).unwrap_err();
        assert!(matches!(err, AnalyticsError::ZeroPriceDivision { .. }));
    }

    #[test]
    fn test_zero_days() {
        let events = [
            CashflowEvent::new(date(2024, 7, 1), 0.05, 0.0, 100.0, 2.5),
            CashflowEvent::new(date(2024, 7, 1), 0.05, 100.0, 0.0, 100.0),
        ];
        let shape = BondShape::classify(&events, date(2024, 3, 1)).unwrap();
        let err = tna(&shape, 0.1, 99.0, date(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, AnalyticsError::ZeroPriceDivision { .. }));

        let events = [CashflowEvent::new(date(2024, 7, 1), 0.0, 100.0, 0.0, 100.0)];
        let shape = BondShape::classify(&events, date(2024, 7, 1)).unwrap();
        assert!(tna(&shape, 0.1, 99.0, date(2024, 7, 1)).is_err());
    }
}
