//! Checkout configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use basket_core::{CoreError, TaxRate};
use serde::Serialize;
use std::env;

/// Checkout run configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutConfig {
    /// Sales tax rate applied to the demo cart (fraction, 0.125 = 12.5%)
    pub sales_tax_rate: TaxRate,

    /// Print the fixed-width receipt to stdout
    pub print_receipt: bool,

    /// Print the totals snapshot as JSON to stdout
    pub print_totals_json: bool,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sales_tax_rate = lookup("BASKET_SALES_TAX_RATE")
            .unwrap_or_else(|| "0.125".to_string())
            .parse::<TaxRate>()
            .map_err(|source| ConfigError::InvalidTaxRate {
                key: "BASKET_SALES_TAX_RATE".to_string(),
                source,
            })?;

        Ok(CheckoutConfig {
            sales_tax_rate,
            print_receipt: parse_flag(&lookup, "BASKET_PRINT_RECEIPT", true)?,
            print_totals_json: parse_flag(&lookup, "BASKET_PRINT_TOTALS_JSON", false)?,
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid tax rate in {key}: {source}")]
    InvalidTaxRate {
        key: String,
        #[source]
        source: CoreError,
    },
}
