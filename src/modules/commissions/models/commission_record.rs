use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::Currency;
use crate::modules::commission_types::models::{RateLine, RateLineId};
use crate::modules::parties::models::PartyId;

/// A middleman entitled to a rate line on some invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionPair {
    pub middleman_id: PartyId,
    pub rate_line: RateLine,
}

/// Commission owed on one installment for one (middleman, rate line) pair.
///
/// Transient: produced by the collector and consumed by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionRecord {
    /// Installment amount the rate applies to
    pub amount: Decimal,
    pub date: NaiveDate,
    pub middleman_id: PartyId,
    pub rate_line: RateLine,
    pub invoice_label: String,
    /// Origin identity of the installment line
    pub origin: String,
    /// Company currency `amount` is expressed in
    pub currency: Currency,
}

impl CommissionRecord {
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            middleman_id: self.middleman_id,
            date: self.date,
            origin: self.origin.clone(),
            rate_line_id: self.rate_line.id,
            currency: self.currency,
        }
    }
}

/// Records sharing a key end up on the same accounting line
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub middleman_id: PartyId,
    pub date: NaiveDate,
    pub origin: String,
    pub rate_line_id: RateLineId,
    pub currency: Currency,
}
