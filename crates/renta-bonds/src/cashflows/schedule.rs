//! Settlement filtering and discounting array construction.

use renta_core::types::Date;

use super::CashflowEvent;

/// Discounting arrays anchored at the settlement date.
///
/// `values[0]` and `dates[0]` are the synthetic anchor: the buyer's outflow
/// (zero in price-from-rate mode) on the settlement date. The remaining
/// positions are the retained cashflows in schedule order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleArrays {
    /// Cash amounts, anchor first.
    pub values: Vec<f64>,
    /// Payment dates, settlement first.
    pub dates: Vec<Date>,
    /// Position of the last discarded event, or 0 when nothing before the
    /// first period was discarded.
    pub cutoff_index: usize,
}

impl ScheduleArrays {
    /// Number of retained cashflows (anchor excluded).
    pub fn cashflow_count(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Settlement (anchor) date.
    pub fn settlement(&self) -> Date {
        self.dates[0]
    }

    /// The last event paid before settlement, read through `cutoff_index`.
    ///
    /// `events` must be the schedule the arrays were built from. `None` in
    /// the first period, when nothing was discarded.
    pub fn last_paid<'e>(&self, events: &'e [CashflowEvent]) -> Option<&'e CashflowEvent> {
        let discarded = events.len().saturating_sub(self.cashflow_count());
        if discarded == 0 {
            return None;
        }
        events.get(self.cutoff_index)
    }
}

/// Position of the first event paid on or after `settlement`.
///
/// Events dated strictly after `settlement - 1 day` survive, so a payment on
/// the settlement date itself is kept. `None` when every event is past.
pub fn first_retained(events: &[CashflowEvent], settlement: Date) -> Option<usize> {
    let boundary = settlement.add_days(-1);
    events.iter().position(|event| event.date > boundary)
}

/// Events that survive the settlement filter.
pub fn remaining_events(events: &[CashflowEvent], settlement: Date) -> &[CashflowEvent] {
    match first_retained(events, settlement) {
        Some(start) => &events[start..],
        None => &[],
    }
}

/// Builds the discounting arrays for a valuation.
///
/// - anchor value is `-price_or_zero * (1 + initial_fee)` dated `settlement`
/// - the last retained amount is scaled by `(1 - ending_fee)`
/// - when every event is past settlement the arrays hold the anchor only
pub fn build_arrays(
    events: &[CashflowEvent],
    settlement: Date,
    initial_fee: f64,
    ending_fee: f64,
    price_or_zero: f64,
) -> ScheduleArrays {
    let (retained, cutoff_index) = match first_retained(events, settlement) {
        Some(start) => (&events[start..], start.saturating_sub(1)),
        None => (&events[events.len()..], events.len().saturating_sub(1)),
    };

    let mut values = Vec::with_capacity(retained.len() + 1);
    let mut dates = Vec::with_capacity(retained.len() + 1);

    values.push(-price_or_zero * (1.0 + initial_fee));
    dates.push(settlement);

    for event in retained {
        values.push(event.amount);
        dates.push(event.date);
    }

    if retained.is_empty() {
        log::debug!("settlement {settlement} is after every scheduled cashflow");
    } else if let Some(last) = values.last_mut() {
        *last *= 1.0 - ending_fee;
    }

    ScheduleArrays {
        values,
        dates,
        cutoff_index,
    }
}
