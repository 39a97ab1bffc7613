use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::core::Currency;
use crate::modules::commission_types::models::RateLine;
use crate::modules::commissions::models::{CommissionRecord, GroupKey};

/// Records sharing one (middleman, date, origin, rate line) key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionGroup {
    pub key: GroupKey,
    pub rate_line: RateLine,
    /// Members in the order they were collected
    pub records: Vec<CommissionRecord>,
}

impl CommissionGroup {
    /// Sum of the members' commissioned amounts
    pub fn amount(&self) -> Decimal {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Invoice labels of all members joined by `-`
    pub fn invoice_labels(&self) -> String {
        self.records
            .iter()
            .map(|r| r.invoice_label.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Group a batch's records by key; groups come out in key order
pub fn aggregate(records: impl IntoIterator<Item = CommissionRecord>) -> Vec<CommissionGroup> {
    let mut groups: BTreeMap<GroupKey, CommissionGroup> = BTreeMap::new();

    for record in records {
        groups
            .entry(record.group_key())
            .or_insert_with_key(|key| CommissionGroup {
                key: key.clone(),
                rate_line: record.rate_line.clone(),
                records: Vec::new(),
            })
            .records
            .push(record);
    }

    groups.into_values().collect()
}
