pub mod currency;
pub mod error;
pub mod telemetry;

pub use currency::{Currency, CurrencyConverter, FixedRateConverter};
pub use error::{AppError, ConfigurationError, Result};
