//! The valuation engine.
//!
//! Holds two independently versioned snapshots behind `parking_lot` locks.
//! The locks are only held long enough to clone or swap an `Arc`; valuation
//! itself runs lock-free against the cloned snapshots.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use renta_analytics::valuation::{Quote, ValuationRequest, ValuationResult, Valuator};
use renta_bonds::cashflows::{remaining_events, CashflowEvent};
use renta_bonds::indices::{ExtrapolationBasis, IndexSeries};
use renta_bonds::instruments::Instrument;
use renta_core::calendars::Calendar;
use renta_core::types::Date;
use renta_traits::{IndexSeriesSource, InstrumentSource};

use crate::error::{EngineError, EngineResult};
use crate::retry::RetryPolicy;
use crate::snapshot::{CatalogSnapshot, IndexSnapshot};

/// Valuation engine over swap-on-reload snapshots.
pub struct ValuationEngine {
    catalog: RwLock<Arc<CatalogSnapshot>>,
    index: RwLock<Arc<IndexSnapshot>>,
    calendar: Arc<dyn Calendar>,
    basis: ExtrapolationBasis,
    versions: AtomicU64,
}

impl ValuationEngine {
    /// Creates an engine with empty snapshots.
    pub fn new(calendar: Arc<dyn Calendar>) -> Self {
        Self {
            catalog: RwLock::new(Arc::new(CatalogSnapshot::default())),
            index: RwLock::new(Arc::new(IndexSnapshot::default())),
            calendar,
            basis: ExtrapolationBasis::default(),
            versions: AtomicU64::new(0),
        }
    }

    /// Sets the index extrapolation basis.
    pub fn with_basis(mut self, basis: ExtrapolationBasis) -> Self {
        self.basis = basis;
        self
    }

    /// The extrapolation basis in use.
    pub fn basis(&self) -> ExtrapolationBasis {
        self.basis
    }

    // =========================================================================
    // SNAPSHOTS
    // =========================================================================

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<CatalogSnapshot> {
        self.catalog.read().clone()
    }

    /// Current index snapshot.
    pub fn index(&self) -> Arc<IndexSnapshot> {
        self.index.read().clone()
    }

    /// Version of the current catalog (0 before the first load).
    pub fn catalog_version(&self) -> u64 {
        self.catalog.read().version()
    }

    /// Version of the current index series (0 before the first load).
    pub fn index_version(&self) -> u64 {
        self.index.read().version()
    }

    fn next_version(&self) -> u64 {
        self.versions.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Replaces the catalog. Instruments failing validation are dropped.
    ///
    /// Returns the new catalog version.
    pub fn replace_catalog(&self, instruments: Vec<Instrument>) -> u64 {
        let total = instruments.len();
        let valid: Vec<Instrument> = instruments
            .into_iter()
            .filter(|instrument| match instrument.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(ticker = %instrument.ticker, error = %e, "Dropping invalid instrument");
                    false
                }
            })
            .collect();

        let kept = valid.len();
        // Version is drawn under the write lock so swaps land in version order
        let version = {
            let mut current = self.catalog.write();
            let version = self.next_version();
            *current = Arc::new(CatalogSnapshot::new(version, valid));
            version
        };
        info!(
            version,
            instruments = kept,
            dropped = total - kept,
            "Catalog replaced"
        );
        version
    }

    /// Replaces the index series.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Reload` for an empty series; the current
    /// snapshot is kept.
    pub fn replace_index_series(&self, series: IndexSeries) -> EngineResult<u64> {
        if series.is_empty() {
            return Err(EngineError::Reload {
                snapshot: "index",
                attempts: 1,
                reason: format!("series '{}' has no samples", series.name()),
            });
        }

        let samples = series.len();
        let last = series.last().map(|s| s.date);
        let version = {
            let mut current = self.index.write();
            let version = self.next_version();
            *current = Arc::new(IndexSnapshot::new(version, series));
            version
        };
        info!(version, samples, last = ?last, "Index series replaced");
        Ok(version)
    }

    // =========================================================================
    // RELOAD
    // =========================================================================

    /// Loads a fresh catalog from `source` and swaps it in.
    pub async fn reload_catalog(&self, source: &dyn InstrumentSource) -> EngineResult<u64> {
        debug!(source = source.name(), "Reloading catalog");
        let instruments = source.load_instruments().await?;
        Ok(self.replace_catalog(instruments))
    }

    /// Loads a fresh index series from `source` and swaps it in.
    pub async fn reload_index(&self, source: &dyn IndexSeriesSource) -> EngineResult<u64> {
        debug!(source = source.name(), "Reloading index series");
        let series = source.load_series().await?;
        self.replace_index_series(series)
    }

    /// [`reload_index`](Self::reload_index) with bounded retries.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Reload` with the last failure once every attempt
    /// has failed. The previous snapshot stays in place.
    pub async fn reload_index_with_retry(
        &self,
        source: &dyn IndexSeriesSource,
        policy: &RetryPolicy,
    ) -> EngineResult<u64> {
        let mut last_error = String::new();

        for attempt in 1..=policy.max_attempts {
            match self.reload_index(source).await {
                Ok(version) => return Ok(version),
                Err(e) => {
                    warn!(
                        source = source.name(),
                        attempt,
                        max_attempts = policy.max_attempts,
                        error = %e,
                        "Index reload failed"
                    );
                    last_error = e.to_string();
                    if attempt < policy.max_attempts {
                        tokio::time::sleep(policy.interval).await;
                    }
                }
            }
        }

        Err(EngineError::Reload {
            snapshot: "index",
            attempts: policy.max_attempts,
            reason: last_error,
        })
    }

    /// Spawns a task that reloads the index series every `period`.
    ///
    /// Failures are logged and the task keeps running; abort the returned
    /// handle to stop it.
    pub fn spawn_index_refresh(
        self: &Arc<Self>,
        source: Arc<dyn IndexSeriesSource>,
        period: Duration,
        policy: RetryPolicy,
    ) -> JoinHandle<()> {
        let engine = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = engine
                    .reload_index_with_retry(source.as_ref(), &policy)
                    .await
                {
                    warn!(error = %e, "Scheduled index refresh gave up");
                }
            }
        })
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Tickers in the current catalog, sorted.
    pub fn tickers(&self) -> Vec<String> {
        self.catalog().tickers()
    }

    /// Looks up an instrument.
    pub fn instrument(&self, ticker: &str) -> EngineResult<Arc<Instrument>> {
        self.catalog()
            .get(ticker)
            .cloned()
            .ok_or_else(|| EngineError::not_found(ticker))
    }

    /// Cashflow schedule of `ticker`, optionally only the payments still due
    /// at `settlement`.
    pub fn schedule(
        &self,
        ticker: &str,
        settlement: Option<Date>,
    ) -> EngineResult<Vec<CashflowEvent>> {
        let instrument = self.instrument(ticker)?;
        Ok(match settlement {
            Some(date) => remaining_events(&instrument.cashflows, date).to_vec(),
            None => instrument.cashflows.clone(),
        })
    }

    // =========================================================================
    // VALUATION
    // =========================================================================

    /// Values one request against the current snapshots.
    pub fn value(&self, request: &ValuationRequest) -> EngineResult<ValuationResult> {
        let catalog = self.catalog();
        let index = self.index();
        self.value_against(&catalog, &index, request)
    }

    /// Yield (and the full report) for a market price.
    pub fn yield_from_price(
        &self,
        ticker: &str,
        settlement: Date,
        price: f64,
    ) -> EngineResult<ValuationResult> {
        self.value(&ValuationRequest::new(ticker, settlement, Quote::Price(price)))
    }

    /// Price (and the full report) for a rate.
    pub fn price_from_rate(
        &self,
        ticker: &str,
        settlement: Date,
        rate: f64,
    ) -> EngineResult<ValuationResult> {
        self.value(&ValuationRequest::new(ticker, settlement, Quote::Rate(rate)))
    }

    /// Values many requests against one pair of snapshots.
    ///
    /// With the `parallel` feature the requests are spread over the rayon
    /// pool. Results keep the request order.
    pub fn value_batch(&self, requests: &[ValuationRequest]) -> Vec<EngineResult<ValuationResult>> {
        let catalog = self.catalog();
        let index = self.index();
        debug!(
            requests = requests.len(),
            catalog_version = catalog.version(),
            index_version = index.version(),
            "Valuing batch"
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return requests
                .par_iter()
                .map(|request| self.value_against(&catalog, &index, request))
                .collect();
        }

        #[cfg(not(feature = "parallel"))]
        requests
            .iter()
            .map(|request| self.value_against(&catalog, &index, request))
            .collect()
    }

    fn value_against(
        &self,
        catalog: &CatalogSnapshot,
        index: &IndexSnapshot,
        request: &ValuationRequest,
    ) -> EngineResult<ValuationResult> {
        let instrument = catalog
            .get(&request.ticker)
            .ok_or_else(|| EngineError::not_found(&request.ticker))?;

        let mut valuator = Valuator::new(self.calendar.as_ref()).with_basis(self.basis);
        if let Some(series) = index.series() {
            valuator = valuator.with_series(series);
        }

        valuator.value(instrument, request).map_err(|source| {
            debug!(ticker = %instrument.ticker, error = %source, "Valuation failed");
            EngineError::Valuation {
                ticker: instrument.ticker.clone(),
                settlement: request.settlement,
                convention: instrument.day_count,
                source,
            }
        })
    }
}
