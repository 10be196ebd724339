//! `renta.toml` configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use renta_bonds::indices::ExtrapolationBasis;
use renta_engine::RetryPolicy;

use crate::cli::DataArgs;
use crate::error::{CliError, CliResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentaConfig {
    /// Data file locations.
    pub data: DataConfig,
    /// Valuation defaults.
    pub valuation: ValuationConfig,
    /// Index reload policy.
    pub reload: ReloadConfig,
}

/// `[data]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Bonds CSV file.
    pub bonds_csv: Option<PathBuf>,
    /// Cashflows CSV file.
    pub cashflows_csv: Option<PathBuf>,
    /// JSON instrument seed; takes precedence over the CSV pair.
    pub seed_json: Option<PathBuf>,
    /// Index coefficient CSV file.
    pub index_csv: Option<PathBuf>,
    /// Holiday CSV file.
    pub holidays_csv: Option<PathBuf>,
}

/// `[valuation]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Fee applied to the purchase price.
    pub initial_fee: f64,
    /// Fee applied to the final cashflow.
    pub ending_fee: f64,
    /// Annual rate used to extrapolate the index past its last sample.
    pub extend_rate: f64,
    /// Extrapolation basis.
    pub extrapolation: ExtrapolationBasis,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            initial_fee: 0.0,
            ending_fee: 0.0,
            extend_rate: 0.0,
            extrapolation: ExtrapolationBasis::default(),
        }
    }
}

/// `[reload]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReloadConfig {
    /// Attempts per index load.
    pub max_attempts: u32,
    /// Seconds between attempts.
    pub retry_interval_secs: u64,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_interval_secs: 2,
        }
    }
}

impl ReloadConfig {
    /// Retry policy for index loads.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_secs(self.retry_interval_secs),
        )
    }
}

impl RentaConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Loads `path` if given, otherwise `renta.toml` in the working
    /// directory if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new("renta.toml");
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line data overrides.
    pub fn apply(&mut self, overrides: &DataArgs) {
        let data = &mut self.data;
        if let Some(path) = &overrides.bonds_csv {
            data.bonds_csv = Some(path.clone());
        }
        if let Some(path) = &overrides.cashflows_csv {
            data.cashflows_csv = Some(path.clone());
        }
        if let Some(path) = &overrides.seed_json {
            data.seed_json = Some(path.clone());
        }
        if let Some(path) = &overrides.index_csv {
            data.index_csv = Some(path.clone());
        }
        if let Some(path) = &overrides.holidays_csv {
            data.holidays_csv = Some(path.clone());
        }
    }
}
