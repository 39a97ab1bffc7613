use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Supported currencies with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indonesian Rupiah (no decimal places)
    IDR,
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// US Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - IDR: 0 (no decimals)
    /// - MYR/USD: 2 (2 decimal places)
    pub fn scale(&self) -> u32 {
        match self {
            Currency::IDR => 0,
            Currency::MYR | Currency::USD => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::IDR => "IDR",
            Currency::MYR => "MYR",
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDR" => Ok(Currency::IDR),
            "MYR" => Ok(Currency::MYR),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

/// Converts amounts between currencies.
///
/// Implementations must be pure: the same inputs always give the same output.
pub trait CurrencyConverter: Send + Sync {
    fn convert(&self, from: Currency, amount: Decimal, to: Currency) -> Result<Decimal>;
}

/// Converter backed by a fixed table of exchange rates.
///
/// A rate registered for `(A, B)` is also used, inverted, for `(B, A)` when no
/// direct rate exists. Results are rounded to the target currency scale.
#[derive(Debug, Clone, Default)]
pub struct FixedRateConverter {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl FixedRateConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register how many units of `to` one unit of `from` buys
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: Decimal) -> Result<Self> {
        if rate <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Exchange rate {} -> {} must be positive, got {}",
                from, to, rate
            )));
        }
        self.rates.insert((from, to), rate);
        Ok(self)
    }

    fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if let Some(rate) = self.rates.get(&(from, to)) {
            return Some(*rate);
        }
        self.rates.get(&(to, from)).map(|rate| Decimal::ONE / *rate)
    }
}

impl CurrencyConverter for FixedRateConverter {
    fn convert(&self, from: Currency, amount: Decimal, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(amount);
        }

        let rate = self.rate(from, to).ok_or_else(|| {
            AppError::validation(format!("No exchange rate from {} to {}", from, to))
        })?;

        Ok(to.round(amount * rate))
    }
}
