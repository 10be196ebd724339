//! End-to-end valuation scenarios.

use approx::assert_relative_eq;
use proptest::prelude::*;

use renta_analytics::prelude::*;
use renta_bonds::prelude::*;
use renta_analytics::yields::DEFAULT_GUESS;
use renta_core::daycounts::days_360;
use renta_core::prelude::*;
use renta_math::solvers::{newton_raphson, SolverConfig};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Quarterly 8% bond amortizing in four equal installments over 2026.
fn quarterly_amortizer() -> Instrument {
    let mut flows = Vec::new();
    let mut residual = 100.0;
    let dates = [
        date(2025, 3, 15),
        date(2025, 6, 15),
        date(2025, 9, 15),
        date(2025, 12, 15),
        date(2026, 3, 15),
        date(2026, 6, 15),
        date(2026, 9, 15),
        date(2026, 12, 15),
    ];
    for (i, d) in dates.iter().enumerate() {
        let interest = residual * 0.08 / 4.0;
        let amort = if i >= 4 { 25.0 } else { 0.0 };
        residual -= amort;
        flows.push(CashflowEvent::new(*d, 0.08, amort, residual, interest + amort));
    }
    Instrument::new("AQ26", date(2024, 12, 15), date(2026, 12, 15), 0.08, flows)
}

#[test]
fn zero_coupon_closed_form_matches_iterative_solve() {
    // A = 100, P = 90, settlement 2024-07-01, maturity 2025-01-01
    let flows = vec![CashflowEvent::new(date(2025, 1, 1), 0.0, 100.0, 0.0, 100.0)];
    let bond = Instrument::new("ZC25", date(2024, 1, 1), date(2025, 1, 1), 0.0, flows);
    let settlement = date(2024, 7, 1);

    let calendar = WeekendCalendar;
    let result = Valuator::new(&calendar)
        .value(&bond, &ValuationRequest::from_price("ZC25", settlement, 90.0))
        .unwrap();

    // Solve -90 + 100 / (1 + r t) = 0 on the same two-point schedule
    let t = DayCountConvention::Thirty360.year_fraction(settlement, date(2025, 1, 1));
    let f = |r: f64| -90.0 + 100.0 / (1.0 + r * t);
    let df = |r: f64| -100.0 * t / (1.0 + r * t).powi(2);
    let iterative = newton_raphson(f, df, DEFAULT_GUESS, &SolverConfig::default()).unwrap();

    assert_relative_eq!(result.yield_rate, iterative.root, epsilon = 1e-6);
    assert_relative_eq!(result.yield_rate, 0.2 / 0.9, epsilon = 1e-9);
}

#[test]
fn zero_coupon_quotes_simple_yield_not_effective_yield() {
    let flows = vec![CashflowEvent::new(date(2025, 1, 1), 0.0, 100.0, 0.0, 100.0)];
    let bond = Instrument::new("ZC25", date(2024, 1, 1), date(2025, 1, 1), 0.0, flows);
    let settlement = date(2024, 7, 1);

    let calendar = WeekendCalendar;
    let result = Valuator::new(&calendar)
        .value(&bond, &ValuationRequest::from_price("ZC25", settlement, 90.0))
        .unwrap();

    // XIRR on the same two flows compounds over actual/365 years
    let effective = internal_rate_of_return(
        &[-90.0, 100.0],
        &[settlement, date(2025, 1, 1)],
        DEFAULT_GUESS,
    )
    .unwrap();

    assert_relative_eq!(result.yield_rate, 0.2222, epsilon = 1e-4);
    assert_relative_eq!(effective, 0.2324, epsilon = 1e-3);
    assert!(
        effective - result.yield_rate > 0.01,
        "bills quote the simple 30/360 yield, {} vs XIRR {}",
        result.yield_rate,
        effective
    );
}

#[test]
fn zero_coupon_accrues_instrument_coupon_over_settlement_year() {
    // Schedule rate column left blank, coupon carried on the instrument
    let flows = vec![CashflowEvent::new(date(2025, 1, 1), 0.0, 100.0, 0.0, 107.5)];
    let bond = Instrument::new("ZC25C", date(2023, 7, 1), date(2025, 1, 1), 0.05, flows)
        .with_day_count(DayCountConvention::ActAct);
    let settlement = date(2024, 3, 1);

    let calendar = WeekendCalendar;
    let result = Valuator::new(&calendar)
        .value(&bond, &ValuationRequest::from_price("ZC25C", settlement, 95.0))
        .unwrap();

    assert_eq!(result.shape, ShapeKind::ZeroCoupon);
    assert_eq!(result.current_coupon, 0.05);
    assert_eq!(result.residual, 100.0);
    // 244 days since issue over the 366 days of 2024
    assert_relative_eq!(result.accrued_interest, 244.0 / 366.0 * 0.05 * 100.0, epsilon = 1e-12);
}

#[test]
fn zero_coupon_tna_matches_days_360() {
    let flows = vec![CashflowEvent::new(date(2025, 3, 31), 0.0, 100.0, 0.0, 100.0)];
    let bond = Instrument::new("ZC25M", date(2024, 1, 31), date(2025, 3, 31), 0.0, flows);
    let settlement = date(2024, 1, 31);

    let calendar = WeekendCalendar;
    let result = Valuator::new(&calendar)
        .value(&bond, &ValuationRequest::from_price("ZC25M", settlement, 88.0))
        .unwrap();

    let days = days_360(settlement, date(2025, 3, 31));
    assert_eq!(days, 420);
    assert_relative_eq!(result.tna, (100.0 / 88.0 - 1.0) * 360.0 / 420.0, epsilon = 1e-12);
}

#[test]
fn settlement_on_payment_date_keeps_payment() {
    let bond = quarterly_amortizer();
    let settlement = date(2025, 6, 15);

    let calendar = WeekendCalendar;
    let result = Valuator::new(&calendar)
        .value(&bond, &ValuationRequest::from_price("AQ26", settlement, 100.0))
        .unwrap();

    // 2025-06-15 is still to be received: last coupon is the March payment
    assert_eq!(result.last_coupon, Some(date(2025, 3, 15)));
    assert_eq!(result.accrued_days, 92);
    assert_eq!(remaining_events(&bond.cashflows, settlement).len(), 7);
}

#[test]
fn single_cashflow_left_uses_closed_form() {
    let bond = quarterly_amortizer();
    let settlement = date(2026, 10, 1);

    let calendar = WeekendCalendar;
    let result = Valuator::new(&calendar)
        .value(&bond, &ValuationRequest::from_price("AQ26", settlement, 25.0))
        .unwrap();

    assert_eq!(result.shape, ShapeKind::ZeroCoupon);
    assert_eq!(result.residual, 25.0);
    assert_eq!(result.last_coupon, Some(date(2026, 9, 15)));
    assert_eq!(result.last_amortization, 25.0);
}

#[test]
fn duration_and_convexity_time_bases_differ() {
    // Convexity measures time with the instrument's convention while the
    // solver and duration use 365-day years; switching the convention must
    // move convexity only.
    let settlement = date(2025, 1, 10);
    let calendar = WeekendCalendar;
    let valuator = Valuator::new(&calendar);

    let thirty = valuator
        .value(
            &quarterly_amortizer(),
            &ValuationRequest::from_price("AQ26", settlement, 99.0),
        )
        .unwrap();
    let act360 = valuator
        .value(
            &quarterly_amortizer().with_day_count(DayCountConvention::Act360),
            &ValuationRequest::from_price("AQ26", settlement, 99.0),
        )
        .unwrap();

    assert_relative_eq!(thirty.yield_rate, act360.yield_rate, epsilon = 1e-12);
    assert_relative_eq!(
        thirty.modified_duration,
        act360.modified_duration,
        epsilon = 1e-12
    );
    assert!((thirty.convexity - act360.convexity).abs() > 1e-6);
}

#[test]
fn extrapolated_index_after_last_sample() {
    let series = IndexSeries::new(
        "CER",
        [
            IndexSample::new(date(2024, 12, 16), 100.0),
            IndexSample::new(date(2025, 1, 2), 102.0),
        ],
    );
    let bond = quarterly_amortizer().with_index("CER", 1);
    let calendar = WeekendCalendar;
    let valuator = Valuator::new(&calendar).with_series(&series);

    let result = valuator
        .value(
            &bond,
            &ValuationRequest::from_price("AQ26", date(2025, 2, 3), 104.0).with_extend_rate(0.30),
        )
        .unwrap();

    // One business day after settlement is 2025-02-04, 33 days past the last sample
    let expected = 102.0 * 1.30f64.powf(33.0 / 365.0);
    // Issue 2024-12-15 is a Sunday; one business day later is Monday 2024-12-16
    assert_eq!(result.index.issue_reference, Some(date(2024, 12, 16)));
    assert_eq!(result.index.settlement_reference, Some(date(2025, 2, 4)));
    assert_relative_eq!(result.index.settlement_coefficient.unwrap(), expected, epsilon = 1e-9);
    assert_relative_eq!(result.index.ratio, expected / 100.0, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn yield_of_price_round_trips(
        rate in -0.05f64..0.60,
        initial_fee in 0.0f64..0.02,
        ending_fee in 0.0f64..0.02,
        day in 0i64..600,
    ) {
        let bond = quarterly_amortizer();
        let settlement = date(2024, 12, 20).add_days(day);
        let calendar = WeekendCalendar;
        let valuator = Valuator::new(&calendar);

        let priced = valuator
            .value(
                &bond,
                &ValuationRequest::from_rate("AQ26", settlement, rate)
                    .with_fees(initial_fee, ending_fee),
            )
            .unwrap();
        prop_assume!(priced.shape == ShapeKind::Amortizing);

        let solved = valuator
            .value(
                &bond,
                &ValuationRequest::from_price("AQ26", settlement, priced.price)
                    .with_fees(initial_fee, ending_fee),
            )
            .unwrap();

        prop_assert!((solved.yield_rate - rate).abs() < 1e-6);
    }
}
