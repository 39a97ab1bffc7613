mod installment_matcher;
mod invoice_workflow;

pub use installment_matcher::match_installments;
pub use invoice_workflow::{InvoiceWorkflow, PassThroughWorkflow};
