//! CLI command implementations.

pub mod bonds;
pub mod index;
pub mod price;
pub mod schedule;
pub mod yields;

pub use bonds::BondsArgs;
pub use index::IndexArgs;
pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
pub use yields::YieldArgs;

use clap::Args;

use renta_analytics::valuation::{Quote, ValuationRequest};
use renta_core::types::Date;

use crate::config::RentaConfig;
use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses an optional settlement date, defaulting to today.
pub fn parse_settlement(s: Option<&str>) -> CliResult<Date> {
    s.map_or_else(|| Ok(Date::today()), parse_date)
}

/// Validates a fee.
pub fn validate_fee(name: &'static str, value: f64) -> CliResult<f64> {
    if !(0.0..1.0).contains(&value) {
        return Err(CliError::InvalidFee { name, value });
    }
    Ok(value)
}

/// Options shared by `yield` and `price`.
#[derive(Args, Debug)]
pub struct ValuationArgs {
    /// Instrument ticker
    pub ticker: String,

    /// Settlement date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub settlement: Option<String>,

    /// Fee on the purchase price (decimal, e.g. 0.005). Overrides config.
    #[arg(long)]
    pub initial_fee: Option<f64>,

    /// Fee on the final cashflow (decimal). Overrides config.
    #[arg(long)]
    pub ending_fee: Option<f64>,

    /// Annual rate for extrapolating the index past its last sample.
    #[arg(long)]
    pub extend_rate: Option<f64>,
}

impl ValuationArgs {
    /// Builds a request, filling unset options from `config`.
    pub fn request(&self, quote: Quote, config: &RentaConfig) -> CliResult<ValuationRequest> {
        let defaults = &config.valuation;
        let settlement = parse_settlement(self.settlement.as_deref())?;
        let initial_fee = validate_fee(
            "initial fee",
            self.initial_fee.unwrap_or(defaults.initial_fee),
        )?;
        let ending_fee = validate_fee("ending fee", self.ending_fee.unwrap_or(defaults.ending_fee))?;

        Ok(ValuationRequest::new(&self.ticker, settlement, quote)
            .with_fees(initial_fee, ending_fee)
            .with_extend_rate(self.extend_rate.unwrap_or(defaults.extend_rate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-15").unwrap(),
            Date::from_ymd(2025, 3, 15).unwrap()
        );
        assert!(matches!(
            parse_date("15/03/2025"),
            Err(CliError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_request_uses_config_defaults() {
        let mut config = RentaConfig::default();
        config.valuation.initial_fee = 0.01;
        config.valuation.extend_rate = 0.3;

        let args = ValuationArgs {
            ticker: "tx26".to_string(),
            settlement: Some("2025-01-02".to_string()),
            initial_fee: None,
            ending_fee: Some(0.002),
            extend_rate: None,
        };
        let request = args.request(Quote::Price(99.0), &config).unwrap();

        assert_eq!(request.ticker, "TX26");
        assert_eq!(request.initial_fee, 0.01);
        assert_eq!(request.ending_fee, 0.002);
        assert_eq!(request.extend_rate, 0.3);
    }

    #[test]
    fn test_rejects_fee_of_one() {
        assert!(validate_fee("initial fee", 1.0).is_err());
        assert!(validate_fee("initial fee", 0.0).is_ok());
    }
}
