//! Zero-coupon vs amortizing classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use renta_core::types::Date;

use super::schedule::remaining_events;
use super::CashflowEvent;
use crate::error::{BondError, BondResult};

/// How an instrument is valued at a given settlement date.
///
/// Decided once from the number of cashflows that survive the settlement
/// filter and threaded through the whole valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BondShape<'a> {
    /// Exactly one cashflow remains: closed-form valuation.
    ZeroCoupon {
        /// Date of the single remaining payment.
        maturity: Date,
        /// Cash paid at maturity.
        amount: f64,
        /// The remaining event.
        event: &'a CashflowEvent,
    },
    /// Two or more cashflows remain: iterative valuation.
    Amortizing {
        /// The remaining events, in schedule order.
        events: &'a [CashflowEvent],
    },
}

impl<'a> BondShape<'a> {
    /// Classifies a schedule at `settlement`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::SettlementAfterMaturity` when no cashflow remains.
    pub fn classify(events: &'a [CashflowEvent], settlement: Date) -> BondResult<Self> {
        match remaining_events(events, settlement) {
            [] => Err(BondError::SettlementAfterMaturity {
                settlement: settlement.to_string(),
                maturity: events
                    .last()
                    .map_or_else(|| "none".to_string(), |e| e.date.to_string()),
            }),
            [event] => Ok(BondShape::ZeroCoupon {
                maturity: event.date,
                amount: event.amount,
                event,
            }),
            events => Ok(BondShape::Amortizing { events }),
        }
    }

    /// The shape tag, for reporting.
    pub fn kind(&self) -> ShapeKind {
        match self {
            BondShape::ZeroCoupon { .. } => ShapeKind::ZeroCoupon,
            BondShape::Amortizing { .. } => ShapeKind::Amortizing,
        }
    }

    /// The remaining (post-filter) events.
    pub fn remaining(&self) -> &'a [CashflowEvent] {
        match self {
            BondShape::ZeroCoupon { event, .. } => std::slice::from_ref(*event),
            BondShape::Amortizing { events } => *events,
        }
    }

    /// Date of the last remaining payment.
    pub fn final_date(&self) -> Date {
        match self {
            BondShape::ZeroCoupon { maturity, .. } => *maturity,
            BondShape::Amortizing { events } => events[events.len() - 1].date,
        }
    }
}

/// Serializable tag for [`BondShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Single remaining cashflow.
    ZeroCoupon,
    /// Two or more remaining cashflows.
    Amortizing,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::ZeroCoupon => write!(f, "zero coupon"),
            ShapeKind::Amortizing => write!(f, "amortizing"),
        }
    }
}
