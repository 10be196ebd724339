//! Versioned immutable snapshots.
//!
//! A snapshot is never mutated after construction; a reload builds a new one
//! and swaps the `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use renta_bonds::indices::IndexSeries;
use renta_bonds::instruments::Instrument;

/// Instrument catalog keyed by ticker.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    version: u64,
    instruments: HashMap<String, Arc<Instrument>>,
}

impl CatalogSnapshot {
    /// Builds a snapshot. Later duplicates of a ticker replace earlier ones.
    pub fn new(version: u64, instruments: impl IntoIterator<Item = Instrument>) -> Self {
        let instruments = instruments
            .into_iter()
            .map(|i| (i.ticker.clone(), Arc::new(i)))
            .collect();
        Self {
            version,
            instruments,
        }
    }

    /// Snapshot version; 0 is the empty startup catalog.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Looks up an instrument by ticker (case-insensitive).
    pub fn get(&self, ticker: &str) -> Option<&Arc<Instrument>> {
        self.instruments
            .get(ticker)
            .or_else(|| self.instruments.get(&ticker.trim().to_uppercase()))
    }

    /// Number of instruments.
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// True when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Tickers in ascending order.
    pub fn tickers(&self) -> Vec<String> {
        let mut tickers: Vec<String> = self.instruments.keys().cloned().collect();
        tickers.sort();
        tickers
    }

    /// All instruments in ticker order.
    pub fn instruments(&self) -> Vec<Arc<Instrument>> {
        let mut all: Vec<Arc<Instrument>> = self.instruments.values().cloned().collect();
        all.sort_by(|a, b| a.ticker.cmp(&b.ticker));
        all
    }
}

/// Index coefficient series.
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    version: u64,
    series: Option<IndexSeries>,
}

impl IndexSnapshot {
    /// Builds a snapshot holding `series`.
    pub fn new(version: u64, series: IndexSeries) -> Self {
        Self {
            version,
            series: Some(series),
        }
    }

    /// Snapshot version; 0 means no series has been loaded.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The loaded series, if any.
    pub fn series(&self) -> Option<&IndexSeries> {
        self.series.as_ref()
    }
}
