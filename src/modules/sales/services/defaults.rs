use tracing::warn;

use crate::core::{AppError, Result};
use crate::modules::commission_types::models::CommissionTypeId;
use crate::modules::parties::{Party, PartyDirectory, PartyId};
use crate::modules::sales::models::Sale;

/// Middleman and commission type pre-filled on a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaleDefaults {
    pub middleman: Option<PartyId>,
    pub commission_type: Option<CommissionTypeId>,
    /// The middleman is enrolled in several types and the first one was taken
    pub ambiguous: bool,
}

/// Commission type pre-filled for `middleman`.
///
/// Takes the first type in enrolment order. When the middleman is enrolled in
/// more than one type the choice is flagged as ambiguous; no other policy is
/// applied.
pub fn commission_type_for(middleman: &Party) -> (Option<CommissionTypeId>, bool) {
    let commissions = middleman.commissions();
    (commissions.first().copied(), commissions.len() > 1)
}

/// Defaults for a sale placed by `customer`: the customer's middleman and
/// that middleman's first enrolled commission type.
pub fn derive_defaults(customer: &Party, directory: &PartyDirectory) -> Result<SaleDefaults> {
    let Some(middleman_id) = customer.assigned_middleman() else {
        return Ok(SaleDefaults::default());
    };

    let middleman = directory.middleman(middleman_id)?;
    let (commission_type, ambiguous) = commission_type_for(middleman);

    if ambiguous {
        warn!(
            customer = customer.id,
            middleman = middleman.id,
            enrolled = middleman.commissions().len(),
            "Middleman has several commission types; defaulting to the first enrolled"
        );
    }

    Ok(SaleDefaults {
        middleman: Some(middleman.id),
        commission_type,
        ambiguous,
    })
}

/// Change the customer of a draft sale and re-derive its commission fields
pub fn change_customer(sale: &mut Sale, customer: &Party, directory: &PartyDirectory) -> Result<SaleDefaults> {
    let defaults = derive_defaults(customer, directory)?;
    sale.set_customer(customer.id)?;
    sale.set_commission(defaults.middleman, defaults.commission_type)?;
    Ok(defaults)
}

/// Change the middleman of a draft sale and re-derive its commission type
pub fn change_middleman(sale: &mut Sale, middleman: Option<&Party>) -> Result<SaleDefaults> {
    let defaults = match middleman {
        Some(m) if !m.is_middleman() => {
            return Err(AppError::validation(format!(
                "Party {} ('{}') is not a middleman",
                m.id, m.name
            )));
        }
        Some(m) => {
            let (commission_type, ambiguous) = commission_type_for(m);
            SaleDefaults {
                middleman: Some(m.id),
                commission_type,
                ambiguous,
            }
        }
        None => SaleDefaults::default(),
    };

    sale.set_commission(defaults.middleman, defaults.commission_type)?;
    Ok(defaults)
}
