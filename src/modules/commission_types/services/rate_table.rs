use std::collections::BTreeMap;

use crate::core::{AppError, Result};
use crate::modules::commission_types::models::{CommissionType, CommissionTypeId, RateLine};

/// Commission types indexed by id
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    types: BTreeMap<CommissionTypeId, CommissionType>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a commission type; it must carry at least one rate line
    pub fn insert(&mut self, commission_type: CommissionType) -> Result<()> {
        if commission_type.lines().is_empty() {
            return Err(AppError::validation(format!(
                "Commission type {} ('{}') has no rate lines",
                commission_type.id, commission_type.name
            )));
        }

        self.types.insert(commission_type.id, commission_type);
        Ok(())
    }

    pub fn with_type(mut self, commission_type: CommissionType) -> Result<Self> {
        self.insert(commission_type)?;
        Ok(self)
    }

    pub fn get(&self, id: CommissionTypeId) -> Option<&CommissionType> {
        self.types.get(&id)
    }

    /// Rate lines of a commission type a sale refers to
    pub fn lines_for(&self, id: CommissionTypeId) -> Result<&[RateLine]> {
        self.types
            .get(&id)
            .map(|t| t.lines())
            .ok_or_else(|| AppError::inconsistency(format!("Unknown commission type {}", id)))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
