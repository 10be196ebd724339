//! Builds a [`ValuationEngine`] from the configured data files.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::debug;

use renta_core::calendars::{Calendar, WeekendCalendar};
use renta_engine::ValuationEngine;
use renta_ext_file::{
    load_holiday_calendar, CsvIndexSeriesSource, CsvInstrumentSource, JsonInstrumentSource,
};

use crate::config::RentaConfig;
use crate::error::CliError;

/// Creates an engine with the configured calendar and extrapolation basis.
pub fn build_engine(config: &RentaConfig) -> Result<ValuationEngine> {
    let calendar: Arc<dyn Calendar> = match &config.data.holidays_csv {
        Some(path) => Arc::new(load_holiday_calendar(path)?),
        None => Arc::new(WeekendCalendar),
    };
    debug!(calendar = calendar.name(), "Calendar ready");
    Ok(ValuationEngine::new(calendar).with_basis(config.valuation.extrapolation))
}

/// Loads the instrument catalog: the JSON seed if configured, otherwise the
/// CSV pair.
pub async fn load_catalog(engine: &ValuationEngine, config: &RentaConfig) -> Result<()> {
    let data = &config.data;
    if let Some(seed) = &data.seed_json {
        let source = JsonInstrumentSource::new(seed);
        engine
            .reload_catalog(&source)
            .await
            .with_context(|| format!("loading {}", seed.display()))?;
        return Ok(());
    }

    let bonds = data
        .bonds_csv
        .as_ref()
        .ok_or(CliError::MissingData("bonds-csv"))?;
    let cashflows = data
        .cashflows_csv
        .as_ref()
        .ok_or(CliError::MissingData("cashflows-csv"))?;
    let source = CsvInstrumentSource::new(bonds, cashflows);
    engine
        .reload_catalog(&source)
        .await
        .with_context(|| format!("loading {} and {}", bonds.display(), cashflows.display()))?;
    Ok(())
}

/// Loads the index series if one is configured. Returns false when none is.
pub async fn load_index(engine: &ValuationEngine, config: &RentaConfig) -> Result<bool> {
    let Some(path) = &config.data.index_csv else {
        return Ok(false);
    };
    let source = CsvIndexSeriesSource::new(path);
    engine
        .reload_index_with_retry(&source, &config.reload.policy())
        .await?;
    Ok(true)
}

/// Engine with catalog and (optional) index loaded.
pub async fn load_all(config: &RentaConfig) -> Result<ValuationEngine> {
    let engine = build_engine(config)?;
    load_catalog(&engine, config).await?;
    load_index(&engine, config).await?;
    Ok(engine)
}
