use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::core::Result;
use crate::modules::commissions::models::{AccountingLine, CommissionSettings, NewAccountingLine};
use crate::modules::commissions::repositories::AccountingLineRepository;
use crate::modules::commissions::services::aggregator::aggregate;
use crate::modules::commissions::services::collector::CommissionCollector;
use crate::modules::commissions::services::line_materializer::LineMaterializer;
use crate::modules::invoices::Invoice;

/// Runs one commission pass over a batch of posted invoices.
///
/// Every line is materialized before anything is written; the lines are then
/// created with a single atomic repository call. Any error leaves the store
/// untouched.
pub struct CommissionEngine {
    collector: CommissionCollector,
    materializer: LineMaterializer,
    repository: Arc<dyn AccountingLineRepository>,
}

impl CommissionEngine {
    pub fn new(collector: CommissionCollector, repository: Arc<dyn AccountingLineRepository>) -> Self {
        Self {
            collector,
            materializer: LineMaterializer::new(),
            repository,
        }
    }

    /// Field sets of the lines this batch would create, without creating them
    pub async fn prepare(&self, invoices: &[Invoice], settings: &CommissionSettings) -> Result<Vec<NewAccountingLine>> {
        let mut seen = BTreeSet::new();
        let mut records = Vec::new();

        for invoice in invoices {
            if !seen.insert(invoice.id) {
                warn!(invoice = %invoice.label(), "Invoice listed twice in batch; ignoring repeat");
                continue;
            }
            records.extend(self.collector.collect(invoice).await?);
        }

        let mut to_create = Vec::new();
        for group in aggregate(records) {
            if let Some(line) = self.materializer.materialize(&group, settings)? {
                to_create.push(line);
            }
        }

        Ok(to_create)
    }

    /// Compute and persist the commission lines owed on `invoices`
    pub async fn process(&self, invoices: &[Invoice], settings: &CommissionSettings) -> Result<Vec<AccountingLine>> {
        let to_create = self.prepare(invoices, settings).await?;

        if to_create.is_empty() {
            return Ok(Vec::new());
        }

        let created = self.repository.create_batch(&to_create).await?;

        info!(
            invoices = invoices.len(),
            lines_created = created.len(),
            "Commission lines created"
        );

        Ok(created)
    }
}
