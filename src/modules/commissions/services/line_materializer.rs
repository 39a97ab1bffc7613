use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{ConfigurationError, Result};
use crate::modules::commissions::models::{CommissionSettings, InvoiceType, NewAccountingLine};
use crate::modules::commissions::services::aggregator::CommissionGroup;

/// Turns a commission group into the field set of a supplier invoice line
#[derive(Debug, Clone, Copy, Default)]
pub struct LineMaterializer;

impl LineMaterializer {
    pub fn new() -> Self {
        Self
    }

    /// Build the line for `group`, or `None` when nothing is owed.
    ///
    /// Fails when no commission product is configured or when the product
    /// has no expense account.
    pub fn materialize(
        &self,
        group: &CommissionGroup,
        settings: &CommissionSettings,
    ) -> Result<Option<NewAccountingLine>> {
        let amount = group.amount();
        if amount.is_zero() {
            debug!(origin = %group.key.origin, "Zero commission amount; no line");
            return Ok(None);
        }

        let product = settings
            .commission_product
            .as_ref()
            .ok_or(ConfigurationError::NoProductConfig)?;

        let account_id = product
            .expense_account_used()
            .ok_or_else(|| ConfigurationError::MissingExpenseAccount {
                product: product.name.clone(),
            })?;

        Ok(Some(NewAccountingLine {
            party_id: group.key.middleman_id,
            invoice_type: InvoiceType::In,
            description: Self::description(group),
            product_id: product.id,
            account_id,
            unit: product.unit.clone(),
            taxes: product.supplier_taxes.clone(),
            currency: group.key.currency,
            quantity: Decimal::ONE,
            unit_price: group.rate_line.commission_on(amount),
            origin: group.key.origin.clone(),
        }))
    }

    /// `Commission "<type>" for payment of invoice <labels> with date <date>.`
    pub fn description(group: &CommissionGroup) -> String {
        format!(
            "Commission \"{}\" for payment of invoice {} with date {}.",
            group.rate_line.display_name(),
            group.invoice_labels(),
            group.key.date
        )
    }
}
