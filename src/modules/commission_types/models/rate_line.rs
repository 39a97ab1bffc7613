use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::commission_types::models::{CategoryId, CommissionTypeId};

pub type RateLineId = i64;

/// Maximum number of decimal places a commission rate may carry (16,4)
pub const RATE_SCALE: u32 = 4;

/// One (category, rate) entry of a commission type.
///
/// `percent` is a ratio applied as a multiplier: 0.0500 means 5 %.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLine {
    pub id: RateLineId,
    pub commission_type_id: CommissionTypeId,
    /// Name of the owning commission type, used as display name
    pub commission_type_name: String,
    pub category_id: CategoryId,
    percent: Decimal,
}

impl RateLine {
    pub fn new(
        id: RateLineId,
        commission_type_id: CommissionTypeId,
        commission_type_name: impl Into<String>,
        category_id: CategoryId,
        percent: Decimal,
    ) -> Result<Self> {
        Self::validate_percent(percent)?;

        Ok(Self {
            id,
            commission_type_id,
            commission_type_name: commission_type_name.into(),
            category_id,
            percent,
        })
    }

    pub fn percent(&self) -> Decimal {
        self.percent
    }

    pub fn display_name(&self) -> &str {
        &self.commission_type_name
    }

    /// Commission owed on `amount` at this rate
    pub fn commission_on(&self, amount: Decimal) -> Decimal {
        self.percent * amount
    }

    /// Rate must be non-negative with at most 4 decimal places
    fn validate_percent(percent: Decimal) -> Result<()> {
        if percent < Decimal::ZERO {
            return Err(AppError::validation("Commission rate cannot be negative"));
        }

        if percent.normalize().scale() > RATE_SCALE {
            return Err(AppError::validation(format!(
                "Commission rate cannot have more than {} decimal places, got {}",
                RATE_SCALE, percent
            )));
        }

        Ok(())
    }
}
