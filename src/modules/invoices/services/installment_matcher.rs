use std::collections::BTreeMap;

use crate::core::{AppError, Result};
use crate::modules::installments::models::ComputedInstallment;
use crate::modules::invoices::models::{InstallmentLine, Invoice};

/// Pair each computed installment with the stored line of the same position.
///
/// Stored lines are ordered by their `sequence`. The pairing fails with
/// `DataInconsistency` when the counts differ, when two lines share a
/// sequence, or when a line's maturity date differs from the computed date.
pub fn match_installments<'a>(
    invoice: &'a Invoice,
    computed: &[ComputedInstallment],
) -> Result<Vec<(ComputedInstallment, &'a InstallmentLine)>> {
    let mut by_sequence: BTreeMap<u32, &InstallmentLine> = BTreeMap::new();
    for line in &invoice.lines_to_pay {
        if by_sequence.insert(line.sequence, line).is_some() {
            return Err(AppError::inconsistency(format!(
                "Invoice {}: several installment lines share sequence {}",
                invoice.label(),
                line.sequence
            )));
        }
    }

    if by_sequence.len() != computed.len() {
        return Err(AppError::inconsistency(format!(
            "Invoice {}: payment term computes {} installments but {} lines to pay are stored",
            invoice.label(),
            computed.len(),
            by_sequence.len()
        )));
    }

    computed
        .iter()
        .zip(by_sequence.into_values())
        .map(|(installment, line)| match line.maturity_date {
            Some(maturity) if maturity != installment.date => Err(AppError::inconsistency(format!(
                "Invoice {}: line {} matures on {} but installment {} is due on {}",
                invoice.label(),
                line.id,
                maturity,
                line.sequence,
                installment.date
            ))),
            _ => Ok((*installment, line)),
        })
        .collect()
}
