use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::modules::commission_types::models::{RateLine, RateLineId};
use crate::modules::parties::models::PartyId;

pub type CommissionTypeId = i64;
pub type CategoryId = i64;

/// Category a rate line targets (e.g. a product family)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionTypeCategory {
    pub id: CategoryId,
    pub name: String,
}

/// Named bundle of category rates a middleman can earn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionType {
    pub id: CommissionTypeId,
    pub name: String,
    lines: Vec<RateLine>,
    /// Middlemen enrolled in this type
    pub parties: BTreeSet<PartyId>,
}

impl CommissionType {
    pub fn new(id: CommissionTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lines: Vec::new(),
            parties: BTreeSet::new(),
        }
    }

    /// Append a rate line owned by this type
    pub fn with_line(mut self, line_id: RateLineId, category_id: CategoryId, percent: Decimal) -> Result<Self> {
        self.add_line(line_id, category_id, percent)?;
        Ok(self)
    }

    pub fn add_line(&mut self, line_id: RateLineId, category_id: CategoryId, percent: Decimal) -> Result<&RateLine> {
        let line = RateLine::new(line_id, self.id, self.name.clone(), category_id, percent)?;
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn lines(&self) -> &[RateLine] {
        &self.lines
    }
}
