use std::collections::BTreeMap;

use crate::core::{AppError, Result};
use crate::modules::commission_types::models::CommissionType;
use crate::modules::parties::models::{Party, PartyId};

/// In-memory registry of parties that keeps cross-party references valid
#[derive(Debug, Clone, Default)]
pub struct PartyDirectory {
    parties: BTreeMap<PartyId, Party>,
}

impl PartyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a party.
    ///
    /// A customer's middleman must already be registered as a middleman, and
    /// a party still referenced as middleman cannot be replaced by a customer.
    pub fn upsert(&mut self, party: Party) -> Result<()> {
        if let Some(middleman_id) = party.assigned_middleman() {
            let middleman = self.middleman(middleman_id)?;
            if middleman.id == party.id {
                return Err(AppError::validation(format!(
                    "Party {} cannot be its own middleman",
                    party.id
                )));
            }
        }

        if !party.is_middleman() {
            if let Some(customer) = self
                .parties
                .values()
                .find(|p| p.assigned_middleman() == Some(party.id))
            {
                return Err(AppError::validation(format!(
                    "Party {} is middleman of {} and must stay a middleman",
                    party.id, customer.id
                )));
            }
        }

        self.parties.insert(party.id, party);
        Ok(())
    }

    pub fn get(&self, id: PartyId) -> Result<&Party> {
        self.parties
            .get(&id)
            .ok_or_else(|| AppError::not_found(format!("Party {}", id)))
    }

    /// Fetch a party that must be a middleman
    pub fn middleman(&self, id: PartyId) -> Result<&Party> {
        let party = self.get(id)?;
        if !party.is_middleman() {
            return Err(AppError::validation(format!(
                "Party {} ('{}') is not a middleman",
                party.id, party.name
            )));
        }
        Ok(party)
    }

    /// Enrol a middleman in a commission type, updating both sides of the relation
    pub fn enroll(&mut self, middleman_id: PartyId, commission_type: &mut CommissionType) -> Result<()> {
        let party = self
            .parties
            .get_mut(&middleman_id)
            .ok_or_else(|| AppError::not_found(format!("Party {}", middleman_id)))?;

        party.enroll(commission_type.id)?;
        commission_type.parties.insert(middleman_id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }
}
