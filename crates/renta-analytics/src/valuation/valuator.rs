//! Valuation orchestration over the bond shape.

use renta_bonds::cashflows::{build_arrays, BondShape, CashflowEvent, ScheduleArrays, ShapeKind};
use renta_bonds::indices::{ExtrapolationBasis, IndexRatio, IndexSeries};
use renta_bonds::instruments::Instrument;
use renta_bonds::BondError;
use renta_core::calendars::Calendar;
use renta_core::daycounts::{days_in_year, DayCountConvention};
use renta_core::types::Date;

use super::zero_coupon::{zero_coupon_price, zero_coupon_yield};
use super::{Quote, ValuationRequest, ValuationResult};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::risk::{convexity_from_arrays, modified_duration, tna};
use crate::yields::{internal_rate_of_return, present_value, DEFAULT_GUESS};

/// Yield, price and risk for the chosen quote.
struct Solved {
    yield_rate: f64,
    /// Price before the index adjustment.
    unadjusted_price: f64,
    modified_duration: f64,
}

/// Accrual context at settlement.
struct Accrual {
    days: i64,
    current_coupon: f64,
    residual: f64,
    interest: f64,
    last_coupon: Option<Date>,
    last_amortization: f64,
}

/// Values instruments against a calendar and an optional index series.
///
/// Borrowed inputs only: a `Valuator` is built per request from whatever
/// snapshot the caller holds.
#[derive(Clone, Copy)]
pub struct Valuator<'a> {
    calendar: &'a dyn Calendar,
    series: Option<&'a IndexSeries>,
    basis: ExtrapolationBasis,
}

impl<'a> Valuator<'a> {
    /// Creates a valuator without an index series.
    pub fn new(calendar: &'a dyn Calendar) -> Self {
        Self {
            calendar,
            series: None,
            basis: ExtrapolationBasis::default(),
        }
    }

    /// Sets the index series used for indexed instruments.
    #[must_use]
    pub fn with_series(mut self, series: &'a IndexSeries) -> Self {
        self.series = Some(series);
        self
    }

    /// Sets the index extrapolation basis.
    #[must_use]
    pub fn with_basis(mut self, basis: ExtrapolationBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Values `instrument` for `request`.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::InvalidInput` for malformed request parameters
    /// - `AnalyticsError::Bond` when settlement is past maturity or the index
    ///   series is missing
    /// - solver and division errors from the yield and risk calculations
    pub fn value(
        &self,
        instrument: &Instrument,
        request: &ValuationRequest,
    ) -> AnalyticsResult<ValuationResult> {
        request.validate()?;

        let settlement = request.settlement;
        let convention = instrument.day_count;
        let events = instrument.cashflows.as_slice();
        let shape = BondShape::classify(events, settlement)?;
        let index = self.index_ratio(instrument, settlement, request.extend_rate)?;

        let solved = match shape {
            BondShape::ZeroCoupon { maturity, amount, .. } => {
                solve_zero_coupon(request, settlement, maturity, amount, convention, index.ratio)?
            }
            BondShape::Amortizing { events: remaining } => {
                solve_amortizing(request, remaining, index.ratio)?
            }
        };

        let price_zero = build_arrays(
            events,
            settlement,
            request.initial_fee,
            request.ending_fee,
            0.0,
        );
        let convexity = convexity_from_arrays(
            &price_zero.values,
            &price_zero.dates,
            solved.yield_rate,
            solved.unadjusted_price,
            convention,
        )?;
        let tna = tna(&shape, solved.yield_rate, solved.unadjusted_price, settlement)?;

        let accrual = accrual(instrument, &price_zero, index.ratio, shape.kind());
        let technical_value = accrual.interest + accrual.residual * index.ratio;
        if technical_value == 0.0 {
            return Err(AnalyticsError::zero_division("parity technical value"));
        }
        let price = solved.unadjusted_price * index.ratio;

        log::debug!(
            "valued {} at {} ({}): yield {:.6}, price {:.6}",
            instrument.ticker,
            settlement,
            shape.kind(),
            solved.yield_rate,
            price
        );

        Ok(ValuationResult {
            ticker: instrument.ticker.clone(),
            settlement,
            shape: shape.kind(),
            yield_rate: solved.yield_rate,
            price,
            modified_duration: solved.modified_duration,
            convexity,
            tna,
            accrued_days: accrual.days,
            current_coupon: accrual.current_coupon,
            residual: accrual.residual,
            accrued_interest: accrual.interest,
            technical_value,
            parity: price / technical_value * 100.0,
            last_coupon: accrual.last_coupon,
            last_amortization: accrual.last_amortization,
            index,
            maturity: instrument.maturity,
            day_count: convention,
        })
    }

    fn index_ratio(
        &self,
        instrument: &Instrument,
        settlement: Date,
        extend_rate: f64,
    ) -> AnalyticsResult<IndexRatio> {
        let Some(name) = instrument.index.as_deref() else {
            return Ok(IndexRatio::unit());
        };
        let series = self
            .series
            .ok_or_else(|| BondError::index_not_found(name))?;

        Ok(IndexRatio::compute(
            series,
            self.calendar,
            settlement,
            instrument.issue_date,
            instrument.offset,
            extend_rate,
            self.basis,
        )?)
    }
}

fn solve_zero_coupon(
    request: &ValuationRequest,
    settlement: Date,
    maturity: Date,
    amount: f64,
    convention: DayCountConvention,
    ratio: f64,
) -> AnalyticsResult<Solved> {
    let year_fraction = convention.year_fraction(settlement, maturity);
    let (fi, fe) = (request.initial_fee, request.ending_fee);

    let (yield_rate, price) = match request.quote {
        Quote::Price(price) => (
            zero_coupon_yield(amount, price, year_fraction, fi, fe, ratio)?,
            price,
        ),
        Quote::Rate(rate) => (
            rate,
            zero_coupon_price(amount, rate, year_fraction, fi, fe, ratio)?,
        ),
    };

    Ok(Solved {
        yield_rate,
        unadjusted_price: price / ratio,
        modified_duration: year_fraction / (1.0 + yield_rate),
    })
}

fn solve_amortizing(
    request: &ValuationRequest,
    remaining: &[CashflowEvent],
    ratio: f64,
) -> AnalyticsResult<Solved> {
    let settlement = request.settlement;
    let (fi, fe) = (request.initial_fee, request.ending_fee);
    let price_zero = build_arrays(remaining, settlement, fi, fe, 0.0);

    let (yield_rate, unadjusted_price) = match request.quote {
        Quote::Price(price) => {
            let unadjusted = price / ratio;
            let arrays = build_arrays(remaining, settlement, fi, fe, unadjusted);
            let rate = internal_rate_of_return(&arrays.values, &arrays.dates, DEFAULT_GUESS)?;
            (rate, unadjusted)
        }
        Quote::Rate(rate) => {
            let pv = present_value(rate, &price_zero.values, &price_zero.dates)?;
            (rate, pv / (1.0 + fi))
        }
    };

    let modified_duration = modified_duration(
        &price_zero.values,
        &price_zero.dates,
        yield_rate,
        unadjusted_price,
    )?;

    Ok(Solved {
        yield_rate,
        unadjusted_price,
        modified_duration,
    })
}

/// Accrued interest since the last payment, or since issue when nothing has
/// been paid yet.
///
/// A zero-coupon bond accrues at the instrument coupon, since its schedule
/// rate column is often blank, and Act/Act divides by the settlement year.
fn accrual(
    instrument: &Instrument,
    arrays: &ScheduleArrays,
    ratio: f64,
    kind: ShapeKind,
) -> Accrual {
    let events = &instrument.cashflows;
    let settlement = arrays.settlement();
    let last_paid = arrays.last_paid(events);
    let next = last_paid
        .map_or(0, |_| arrays.cutoff_index + 1)
        .min(events.len().saturating_sub(1));

    let start = last_paid.map_or(instrument.issue_date, |e| e.date);
    let residual = last_paid.map_or_else(|| events[next].residual_before(), |e| e.residual);
    let zero_coupon = kind == ShapeKind::ZeroCoupon;
    let current_coupon = if zero_coupon {
        instrument.coupon
    } else {
        events[next].rate
    };

    let convention = instrument.day_count;
    let days = (settlement - start).max(0);
    let year_fraction = match convention {
        DayCountConvention::ActAct => {
            let basis = if zero_coupon { settlement } else { start };
            days as f64 / f64::from(days_in_year(basis))
        }
        _ => convention.year_fraction(start, settlement).max(0.0),
    };

    Accrual {
        days,
        current_coupon,
        residual,
        interest: year_fraction * current_coupon * residual * ratio,
        last_coupon: last_paid.map(|e| e.date),
        last_amortization: last_paid.map_or(0.0, |e| e.amortization),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use renta_bonds::indices::IndexSample;
    use renta_core::calendars::WeekendCalendar;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Semiannual 10% bond amortizing 50 + 50.
    fn amortizer() -> Instrument {
        let flows = vec![
            CashflowEvent::new(date(2024, 7, 1), 0.10, 0.0, 100.0, 5.0),
            CashflowEvent::new(date(2025, 1, 1), 0.10, 50.0, 50.0, 55.0),
            CashflowEvent::new(date(2025, 7, 1), 0.10, 0.0, 50.0, 2.5),
            CashflowEvent::new(date(2026, 1, 1), 0.10, 50.0, 0.0, 52.5),
        ];
        Instrument::new("AM26", date(2024, 1, 1), date(2026, 1, 1), 0.10, flows)
    }

    fn zero_coupon() -> Instrument {
        let flows = vec![CashflowEvent::new(date(2025, 1, 1), 0.0, 100.0, 0.0, 100.0)];
        Instrument::new("ZC25", date(2024, 1, 1), date(2025, 1, 1), 0.0, flows)
    }

    #[test]
    fn test_zero_coupon_price_quote() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let request = ValuationRequest::from_price("ZC25", date(2024, 7, 1), 90.0);

        let result = valuator.value(&zero_coupon(), &request).unwrap();

        assert_eq!(result.shape, ShapeKind::ZeroCoupon);
        // 30/360: 180 days to maturity
        let expected = (100.0 / 90.0 - 1.0) / 0.5;
        assert_relative_eq!(result.yield_rate, expected, epsilon = 1e-12);
        assert_relative_eq!(result.modified_duration, 0.5 / (1.0 + expected), epsilon = 1e-12);
        assert_relative_eq!(result.tna, (100.0 / 90.0 - 1.0) * 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.price, 90.0, epsilon = 1e-12);
        assert_eq!(result.residual, 100.0);
        assert_eq!(result.accrued_interest, 0.0);
        assert_relative_eq!(result.parity, 90.0, epsilon = 1e-12);
        assert_eq!(result.last_coupon, None);
        assert_eq!(result.index, IndexRatio::unit());
    }

    #[test]
    fn test_zero_coupon_rate_quote_round_trips() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let settlement = date(2024, 7, 1);

        let by_price = valuator
            .value(&zero_coupon(), &ValuationRequest::from_price("ZC25", settlement, 93.0))
            .unwrap();
        let by_rate = valuator
            .value(
                &zero_coupon(),
                &ValuationRequest::from_rate("ZC25", settlement, by_price.yield_rate),
            )
            .unwrap();

        assert_relative_eq!(by_rate.price, 93.0, epsilon = 1e-9);
    }

    #[test]
    fn test_amortizing_first_period() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let request = ValuationRequest::from_price("AM26", date(2024, 4, 1), 100.0);

        let result = valuator.value(&amortizer(), &request).unwrap();

        assert_eq!(result.shape, ShapeKind::Amortizing);
        assert_eq!(result.last_coupon, None);
        assert_eq!(result.residual, 100.0);
        assert_eq!(result.current_coupon, 0.10);
        assert_eq!(result.accrued_days, 91);
        // 30/360 from issue: 90 days
        assert_relative_eq!(result.accrued_interest, 0.25 * 0.10 * 100.0, epsilon = 1e-12);
        assert_relative_eq!(result.technical_value, 102.5, epsilon = 1e-12);
        assert!(result.yield_rate > 0.0);
    }

    #[test]
    fn test_amortizing_after_amortization() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let request = ValuationRequest::from_price("AM26", date(2025, 4, 1), 50.0);

        let result = valuator.value(&amortizer(), &request).unwrap();

        assert_eq!(result.last_coupon, Some(date(2025, 1, 1)));
        assert_eq!(result.last_amortization, 50.0);
        assert_eq!(result.residual, 50.0);
        assert_eq!(result.accrued_days, 90);
        assert_relative_eq!(result.accrued_interest, 0.25 * 0.10 * 50.0, epsilon = 1e-12);
        assert_relative_eq!(result.parity, 50.0 / 51.25 * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_amortizing_rate_round_trip_with_fees() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let settlement = date(2024, 9, 15);

        let priced = valuator
            .value(
                &amortizer(),
                &ValuationRequest::from_rate("AM26", settlement, 0.12).with_fees(0.005, 0.01),
            )
            .unwrap();
        let solved = valuator
            .value(
                &amortizer(),
                &ValuationRequest::from_price("AM26", settlement, priced.price)
                    .with_fees(0.005, 0.01),
            )
            .unwrap();

        assert_relative_eq!(solved.yield_rate, 0.12, epsilon = 1e-6);
        assert_relative_eq!(solved.modified_duration, priced.modified_duration, epsilon = 1e-5);
    }

    #[test]
    fn test_indexed_instrument_uses_ratio() {
        let series = IndexSeries::new(
            "CER",
            [
                IndexSample::new(date(2024, 1, 1), 100.0),
                IndexSample::new(date(2024, 9, 16), 150.0),
            ],
        );
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar).with_series(&series);
        let bond = amortizer().with_index("CER", 0);
        let request = ValuationRequest::from_price("AM26", date(2024, 9, 16), 150.0);

        let indexed = valuator.value(&bond, &request).unwrap();
        let plain = valuator
            .value(
                &amortizer(),
                &ValuationRequest::from_price("AM26", date(2024, 9, 16), 100.0),
            )
            .unwrap();

        assert_relative_eq!(indexed.index.ratio, 1.5, epsilon = 1e-12);
        assert_relative_eq!(indexed.yield_rate, plain.yield_rate, epsilon = 1e-9);
        assert_relative_eq!(
            indexed.technical_value,
            plain.technical_value * 1.5,
            epsilon = 1e-9
        );
        assert_relative_eq!(indexed.parity, plain.parity, epsilon = 1e-9);
    }

    #[test]
    fn test_indexed_without_series() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let bond = amortizer().with_index("CER", 10);
        let err = valuator
            .value(&bond, &ValuationRequest::from_price("AM26", date(2024, 4, 1), 100.0))
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Bond(BondError::IndexNotFound { .. })
        ));
    }

    #[test]
    fn test_settlement_after_maturity() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let err = valuator
            .value(
                &amortizer(),
                &ValuationRequest::from_price("AM26", date(2026, 6, 1), 100.0),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Bond(BondError::SettlementAfterMaturity { .. })
        ));
    }

    #[test]
    fn test_invalid_request_rejected() {
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);
        let err = valuator
            .value(
                &amortizer(),
                &ValuationRequest::from_price("AM26", date(2024, 4, 1), -1.0),
            )
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }
}
