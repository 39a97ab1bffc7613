use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::commission_types::models::{CategoryId, CommissionTypeId};
use crate::modules::parties::models::PartyId;

pub type SaleId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleState {
    Draft,
    Quotation,
    Confirmed,
    Processing,
    Done,
    Cancel,
}

/// A sale as seen by the commission engine.
///
/// `commission_type` needs a `middleman`; a middleman without a type is only
/// allowed while the sale is a draft. Both can only change in draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    customer: PartyId,
    state: SaleState,
    middleman: Option<PartyId>,
    commission_type: Option<CommissionTypeId>,
    /// Categories of the products sold
    pub categories: BTreeSet<CategoryId>,
}

impl Sale {
    /// A draft sale without middleman
    pub fn new(id: SaleId, customer: PartyId) -> Self {
        Self {
            id,
            customer,
            state: SaleState::Draft,
            middleman: None,
            commission_type: None,
            categories: BTreeSet::new(),
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn customer(&self) -> PartyId {
        self.customer
    }

    pub fn state(&self) -> SaleState {
        self.state
    }

    pub fn middleman(&self) -> Option<PartyId> {
        self.middleman
    }

    pub fn commission_type(&self) -> Option<CommissionTypeId> {
        self.commission_type
    }

    /// The (middleman, commission type) pair when the sale earns a commission
    pub fn commission_assignment(&self) -> Option<(PartyId, CommissionTypeId)> {
        match (self.middleman, self.commission_type) {
            (Some(m), Some(t)) => Some((m, t)),
            _ => None,
        }
    }

    pub fn set_customer(&mut self, customer: PartyId) -> Result<()> {
        self.ensure_draft()?;
        self.customer = customer;
        Ok(())
    }

    /// Set or clear the middleman and commission type together.
    ///
    /// A middleman may be set without a type while the sale is a draft; the
    /// type is only required on confirmation.
    pub fn set_commission(
        &mut self,
        middleman: Option<PartyId>,
        commission_type: Option<CommissionTypeId>,
    ) -> Result<()> {
        self.ensure_draft()?;

        if middleman.is_none() && commission_type.is_some() {
            return Err(AppError::validation(format!(
                "Sale {}: a commission type requires a middleman",
                self.id
            )));
        }

        self.middleman = middleman;
        self.commission_type = commission_type;
        Ok(())
    }

    /// Move the sale out of draft; commission fields become read-only
    pub fn confirm(&mut self) -> Result<()> {
        match self.state {
            SaleState::Draft | SaleState::Quotation => {
                if self.middleman.is_some() && self.commission_type.is_none() {
                    return Err(AppError::validation(format!(
                        "Sale {}: a commission type is required when a middleman is set",
                        self.id
                    )));
                }
                self.state = SaleState::Confirmed;
                Ok(())
            }
            other => Err(AppError::validation(format!(
                "Sale {} cannot be confirmed from state {:?}",
                self.id, other
            ))),
        }
    }

    fn ensure_draft(&self) -> Result<()> {
        if self.state != SaleState::Draft {
            return Err(AppError::validation(format!(
                "Sale {} is not a draft; middleman and commission type are read-only",
                self.id
            )));
        }
        Ok(())
    }
}
