use std::sync::Arc;

use tracing::info;

use crate::core::{CurrencyConverter, Result};
use crate::modules::commission_types::{Applicability, RateTable};
use crate::modules::commissions::models::AccountingLine;
use crate::modules::commissions::repositories::{AccountingLineRepository, SettingsRepository};
use crate::modules::commissions::services::collector::CommissionCollector;
use crate::modules::commissions::services::commission_engine::CommissionEngine;
use crate::modules::installments::InstallmentScheduler;
use crate::modules::invoices::{Invoice, InvoiceWorkflow};

/// Result of processing an invoice batch
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Invoices as returned by the posting workflow
    pub invoices: Vec<Invoice>,
    pub lines: Vec<AccountingLine>,
}

/// Entry point wired into invoice processing: posts the batch, then books
/// the commissions owed on it.
///
/// Posting side effects are not undone if commission generation fails.
pub struct CommissionService {
    workflow: Arc<dyn InvoiceWorkflow>,
    settings: Arc<dyn SettingsRepository>,
    engine: CommissionEngine,
}

impl CommissionService {
    pub fn new(
        workflow: Arc<dyn InvoiceWorkflow>,
        settings: Arc<dyn SettingsRepository>,
        engine: CommissionEngine,
    ) -> Self {
        Self {
            workflow,
            settings,
            engine,
        }
    }

    /// Wire a service from its collaborators
    pub fn from_parts(
        workflow: Arc<dyn InvoiceWorkflow>,
        settings: Arc<dyn SettingsRepository>,
        rate_table: Arc<RateTable>,
        applicability: Arc<dyn Applicability>,
        converter: Arc<dyn CurrencyConverter>,
        scheduler: Arc<dyn InstallmentScheduler>,
        repository: Arc<dyn AccountingLineRepository>,
    ) -> Self {
        let collector = CommissionCollector::new(
            rate_table,
            applicability,
            converter,
            scheduler,
            repository.clone(),
        );
        Self::new(workflow, settings, CommissionEngine::new(collector, repository))
    }

    pub async fn process_invoices(&self, invoices: Vec<Invoice>) -> Result<ProcessOutcome> {
        let invoices = self.workflow.post(invoices).await?;
        let settings = self.settings.load_settings().await?;
        let lines = self.engine.process(&invoices, &settings).await?;

        info!(
            invoices = invoices.len(),
            commission_lines = lines.len(),
            "Invoice batch processed"
        );

        Ok(ProcessOutcome { invoices, lines })
    }
}
