//! # Configuration State
//!
//! Store configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CUPCAKE_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex needed.

use cupcake_core::Money;
use serde::{Deserialize, Serialize};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shown on the home screen
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Cupcake Lover".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CUPCAKE_STORE_NAME`
    /// - `CUPCAKE_CURRENCY_CODE`
    /// - `CUPCAKE_CURRENCY_SYMBOL`
    /// - `CUPCAKE_CURRENCY_DECIMALS` (0-4)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(name) = lookup("CUPCAKE_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(code) = lookup("CUPCAKE_CURRENCY_CODE") {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidValue("CUPCAKE_CURRENCY_CODE".to_string()));
            }
            config.currency_code = code.to_ascii_uppercase();
        }

        if let Some(symbol) = lookup("CUPCAKE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("CUPCAKE_CURRENCY_DECIMALS") {
            config.currency_decimals = decimals
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= 4)
                .ok_or_else(|| ConfigError::InvalidValue("CUPCAKE_CURRENCY_DECIMALS".to_string()))?;
        }

        Ok(config)
    }

    /// Formats an amount stored in cents using the configured symbol.
    ///
    /// Amounts are always kept in cents; `currency_decimals` only controls how
    /// many fractional digits are printed.
    ///
    /// ## Example
    /// ```rust
    /// use cupcake_core::Money;
    /// use cupcake_storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(450)), "$4.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let whole = (cents / 100).abs();
        let frac = (cents % 100).abs();

        match self.currency_decimals {
            0 => format!("{}{}{}", sign, self.currency_symbol, whole),
            1 => format!("{}{}{}.{}", sign, self.currency_symbol, whole, frac / 10),
            d => format!(
                "{}{}{}.{:02}{}",
                sign,
                self.currency_symbol,
                whole,
                frac,
                "0".repeat(d as usize - 2)
            ),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
