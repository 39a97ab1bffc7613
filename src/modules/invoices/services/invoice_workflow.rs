use async_trait::async_trait;

use crate::core::Result;
use crate::modules::invoices::models::Invoice;

/// Posting step that runs before commissions are computed.
///
/// Returns the invoices as they are after posting (with their ledger moves).
/// An error aborts the whole batch before any commission line is created.
#[async_trait]
pub trait InvoiceWorkflow: Send + Sync {
    async fn post(&self, invoices: Vec<Invoice>) -> Result<Vec<Invoice>>;
}

/// Workflow for invoices already posted upstream: hands them back untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughWorkflow;

#[async_trait]
impl InvoiceWorkflow for PassThroughWorkflow {
    async fn post(&self, invoices: Vec<Invoice>) -> Result<Vec<Invoice>> {
        Ok(invoices)
    }
}
