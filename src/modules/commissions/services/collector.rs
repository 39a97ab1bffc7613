use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{CurrencyConverter, Result};
use crate::modules::commission_types::{Applicability, RateTable};
use crate::modules::commissions::models::{CommissionPair, CommissionRecord};
use crate::modules::commissions::repositories::AccountingLineRepository;
use crate::modules::installments::models::ComputedInstallment;
use crate::modules::installments::InstallmentScheduler;
use crate::modules::invoices::{match_installments, Invoice};

/// Finds the commissions owed on the paid installments of an invoice
pub struct CommissionCollector {
    rate_table: Arc<RateTable>,
    applicability: Arc<dyn Applicability>,
    converter: Arc<dyn CurrencyConverter>,
    scheduler: Arc<dyn InstallmentScheduler>,
    repository: Arc<dyn AccountingLineRepository>,
}

impl CommissionCollector {
    pub fn new(
        rate_table: Arc<RateTable>,
        applicability: Arc<dyn Applicability>,
        converter: Arc<dyn CurrencyConverter>,
        scheduler: Arc<dyn InstallmentScheduler>,
        repository: Arc<dyn AccountingLineRepository>,
    ) -> Self {
        Self {
            rate_table,
            applicability,
            converter,
            scheduler,
            repository,
        }
    }

    /// Distinct (middleman, rate line) pairs over the invoice's sales, in
    /// sale order then rate line order.
    ///
    /// A pair shared by several sales counts once: amounts come from the
    /// installments, not from the sales.
    pub fn commission_pairs(&self, invoice: &Invoice) -> Result<Vec<CommissionPair>> {
        let mut pairs: Vec<CommissionPair> = Vec::new();

        for sale in &invoice.sales {
            let Some((middleman_id, commission_type)) = sale.commission_assignment() else {
                continue;
            };

            for line in self.rate_table.lines_for(commission_type)? {
                if !self.applicability.is_applicable(line, sale) {
                    continue;
                }

                let seen = pairs
                    .iter()
                    .any(|p| p.middleman_id == middleman_id && p.rate_line.id == line.id);
                if !seen {
                    pairs.push(CommissionPair {
                        middleman_id,
                        rate_line: line.clone(),
                    });
                }
            }
        }

        Ok(pairs)
    }

    /// Installments of the invoice in company currency, falling back to a
    /// single installment on the invoice date when the term yields nothing
    pub fn installments(&self, invoice: &Invoice) -> Result<Vec<ComputedInstallment>> {
        let company_currency = invoice.company.currency;
        let total = self
            .converter
            .convert(invoice.currency, invoice.untaxed_amount, company_currency)?;

        let installments = self.scheduler.compute(
            &invoice.payment_term,
            total,
            company_currency,
            invoice.invoice_date,
        )?;

        if installments.is_empty() {
            return Ok(vec![ComputedInstallment::new(invoice.invoice_date, total)]);
        }

        Ok(installments)
    }

    /// Commission records for every reconciled, not yet commissioned
    /// installment of `invoice`
    pub async fn collect(&self, invoice: &Invoice) -> Result<Vec<CommissionRecord>> {
        let label = invoice.label();

        if !invoice.is_posted() {
            debug!(invoice = %label, "Invoice has no move; skipping commissions");
            return Ok(Vec::new());
        }

        let pairs = self.commission_pairs(invoice)?;
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let installments = self.installments(invoice)?;
        let matched = match_installments(invoice, &installments)?;

        let mut records = Vec::new();
        for (installment, line) in matched {
            if !line.is_reconciled() {
                debug!(invoice = %label, line = line.id, "Installment not reconciled yet");
                continue;
            }

            let origin = line.origin();
            if self.repository.exists_by_origin(&origin).await? {
                debug!(invoice = %label, origin = %origin, "Commission already generated");
                continue;
            }

            for pair in &pairs {
                records.push(CommissionRecord {
                    amount: installment.amount,
                    date: installment.date,
                    middleman_id: pair.middleman_id,
                    rate_line: pair.rate_line.clone(),
                    invoice_label: label.clone(),
                    origin: origin.clone(),
                    currency: invoice.company.currency,
                });
            }
        }

        if !records.is_empty() {
            info!(
                invoice = %label,
                pairs = pairs.len(),
                records = records.len(),
                "Collected commission records"
            );
        }

        Ok(records)
    }
}
