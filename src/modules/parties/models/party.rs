use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::commission_types::models::CommissionTypeId;

pub type PartyId = i64;

/// What a party does in the commission flow.
///
/// A party either earns commissions or is a customer that may be assigned a
/// middleman; it can never be both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum PartyRole {
    /// Earns commissions; `commissions` keeps enrolment order
    Middleman { commissions: Vec<CommissionTypeId> },
    /// Ordinary party, optionally referred by a middleman
    Customer { middleman: Option<PartyId> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    role: PartyRole,
}

impl Party {
    /// A middleman enrolled in `commissions` (duplicates are dropped, order kept)
    pub fn middleman(id: PartyId, name: impl Into<String>, commissions: Vec<CommissionTypeId>) -> Self {
        let mut enrolled: Vec<CommissionTypeId> = Vec::with_capacity(commissions.len());
        for type_id in commissions {
            if !enrolled.contains(&type_id) {
                enrolled.push(type_id);
            }
        }

        Self {
            id,
            name: name.into(),
            role: PartyRole::Middleman { commissions: enrolled },
        }
    }

    /// A customer, optionally assigned to `middleman`
    pub fn customer(id: PartyId, name: impl Into<String>, middleman: Option<&Party>) -> Result<Self> {
        let mut party = Self {
            id,
            name: name.into(),
            role: PartyRole::Customer { middleman: None },
        };
        party.assign_middleman(middleman)?;
        Ok(party)
    }

    pub fn role(&self) -> &PartyRole {
        &self.role
    }

    pub fn is_middleman(&self) -> bool {
        matches!(self.role, PartyRole::Middleman { .. })
    }

    /// The middleman assigned to this customer; always `None` for middlemen
    pub fn assigned_middleman(&self) -> Option<PartyId> {
        match &self.role {
            PartyRole::Customer { middleman } => *middleman,
            PartyRole::Middleman { .. } => None,
        }
    }

    /// Commission types this middleman is enrolled in; empty for customers
    pub fn commissions(&self) -> &[CommissionTypeId] {
        match &self.role {
            PartyRole::Middleman { commissions } => commissions.as_slice(),
            PartyRole::Customer { .. } => &[],
        }
    }

    /// Point this customer at another middleman (or none)
    pub fn assign_middleman(&mut self, middleman: Option<&Party>) -> Result<()> {
        if let Some(m) = middleman {
            if !m.is_middleman() {
                return Err(AppError::validation(format!(
                    "Party {} ('{}') is not a middleman",
                    m.id, m.name
                )));
            }
            if m.id == self.id {
                return Err(AppError::validation(format!(
                    "Party {} cannot be its own middleman",
                    self.id
                )));
            }
        }

        match &mut self.role {
            PartyRole::Customer { middleman: slot } => {
                *slot = middleman.map(|m| m.id);
                Ok(())
            }
            PartyRole::Middleman { .. } => Err(AppError::validation(format!(
                "Middleman {} cannot be assigned a middleman",
                self.id
            ))),
        }
    }

    /// Enrol this middleman in a commission type (no-op if already enrolled)
    pub fn enroll(&mut self, commission_type: CommissionTypeId) -> Result<()> {
        match &mut self.role {
            PartyRole::Middleman { commissions } => {
                if !commissions.contains(&commission_type) {
                    commissions.push(commission_type);
                }
                Ok(())
            }
            PartyRole::Customer { .. } => Err(AppError::validation(format!(
                "Party {} is not a middleman and cannot earn commissions",
                self.id
            ))),
        }
    }
}
