use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::{AppError, Currency, Result};
use crate::modules::installments::models::{ComputedInstallment, PaymentTerm, PaymentTermLineKind};

/// Turns an invoice total and its payment term into dated installments.
///
/// May return an empty schedule (e.g. for a term without lines).
pub trait InstallmentScheduler: Send + Sync {
    fn compute(
        &self,
        term: &PaymentTerm,
        total: Decimal,
        currency: Currency,
        start_date: NaiveDate,
    ) -> Result<Vec<ComputedInstallment>>;
}

/// Scheduler that evaluates payment term lines in order.
///
/// Amounts are rounded to the currency scale; the `Remainder` line takes
/// whatever is left, absorbing rounding. Zero-amount installments are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentTermScheduler;

impl PaymentTermScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl InstallmentScheduler for PaymentTermScheduler {
    fn compute(
        &self,
        term: &PaymentTerm,
        total: Decimal,
        currency: Currency,
        start_date: NaiveDate,
    ) -> Result<Vec<ComputedInstallment>> {
        let mut installments = Vec::with_capacity(term.lines().len());
        let mut remaining = total;
        let mut has_remainder = false;

        for line in term.lines() {
            let amount = match line.kind {
                PaymentTermLineKind::Percent(ratio) => currency.round(total * ratio),
                PaymentTermLineKind::Fixed(amount) => currency.round(amount),
                PaymentTermLineKind::Remainder => {
                    has_remainder = true;
                    remaining
                }
            };
            remaining -= amount;

            if amount.is_zero() {
                continue;
            }

            // Installments carry the sign of the total; overshooting it would
            // leave the remainder with the opposite sign
            if amount.is_sign_negative() != total.is_sign_negative() {
                warn!(
                    term = term.name.as_str(),
                    total = %total,
                    amount = %amount,
                    "Payment term schedules more than the total"
                );
                return Err(AppError::validation(format!(
                    "Payment term '{}' schedules {} against a total of {}",
                    term.name, amount, total
                )));
            }

            installments.push(ComputedInstallment::new(line.due_date(start_date)?, amount));
        }

        if !term.is_empty() && !has_remainder && !remaining.is_zero() {
            warn!(
                term = term.name.as_str(),
                total = %total,
                remaining = %remaining,
                "Payment term does not cover the full amount"
            );
            return Err(AppError::validation(format!(
                "Payment term '{}' leaves {} unscheduled; add a remainder line",
                term.name, remaining
            )));
        }

        debug!(
            term = term.name.as_str(),
            total = %total,
            installments = installments.len(),
            "Computed payment term schedule"
        );

        Ok(installments)
    }
}
