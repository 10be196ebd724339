//! Snapshot sources.
//!
//! Each call returns a complete batch; the engine swaps it in wholesale.

use async_trait::async_trait;

use renta_bonds::indices::IndexSeries;
use renta_bonds::instruments::Instrument;

use crate::error::TraitError;

// =============================================================================
// INSTRUMENT SOURCE
// =============================================================================

/// Supplies the instrument catalog.
#[async_trait]
pub trait InstrumentSource: Send + Sync {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Loads every active instrument with its cashflows.
    async fn load_instruments(&self) -> Result<Vec<Instrument>, TraitError>;
}

// =============================================================================
// INDEX SERIES SOURCE
// =============================================================================

/// Supplies the index coefficient series.
#[async_trait]
pub trait IndexSeriesSource: Send + Sync {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Loads the full series.
    async fn load_series(&self) -> Result<IndexSeries, TraitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use renta_bonds::indices::IndexSample;
    use renta_core::types::Date;

    struct Fixed;

    #[async_trait]
    impl IndexSeriesSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn load_series(&self) -> Result<IndexSeries, TraitError> {
            let date = Date::from_ymd(2024, 1, 1)?;
            Ok(IndexSeries::new("CER", [IndexSample::new(date, 100.0)]))
        }
    }

    struct Offline;

    #[async_trait]
    impl InstrumentSource for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        async fn load_instruments(&self) -> Result<Vec<Instrument>, TraitError> {
            Err(TraitError::SourceNotAvailable("offline".into()))
        }
    }

    #[tokio::test]
    async fn test_sources_are_object_safe() {
        let series: Box<dyn IndexSeriesSource> = Box::new(Fixed);
        let loaded = series.load_series().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(series.name(), "fixed");

        let catalog: Box<dyn InstrumentSource> = Box::new(Offline);
        let err = catalog.load_instruments().await.unwrap_err();
        assert!(matches!(err, TraitError::SourceNotAvailable(_)));
    }
}
