//! # Renta Engine
//!
//! The valuation engine: instrument catalog and index series snapshots plus
//! the operations that value against them.
//!
//! This crate provides:
//! - [`ValuationEngine`]: snapshot holder and valuation entry point
//! - [`CatalogSnapshot`] / [`IndexSnapshot`]: versioned, immutable snapshots
//! - [`RetryPolicy`]: bounded retry for snapshot reloads
//!
//! ## Architecture
//!
//! ```text
//! InstrumentSource ──> reload_catalog ──> CatalogSnapshot ─┐
//!                                                          ├─> Valuator ─> ValuationResult
//! IndexSeriesSource ─> reload_index ───> IndexSnapshot ───┘
//! ```
//!
//! Readers clone each snapshot `Arc` once per request, so a reload running
//! concurrently is seen either entirely or not at all.
//!
//! ## Usage
//!
//! ```ignore
//! let engine = ValuationEngine::new(Arc::new(WeekendCalendar));
//! engine.reload_catalog(&csv_source).await?;
//! engine.reload_index_with_retry(&index_source, &RetryPolicy::default()).await?;
//!
//! let result = engine.value(&ValuationRequest::from_price("TX26", settlement, 101.5))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod retry;
pub mod snapshot;

// Re-exports
pub use engine::ValuationEngine;
pub use error::{EngineError, EngineResult};
pub use retry::RetryPolicy;
pub use snapshot::{CatalogSnapshot, IndexSnapshot};
