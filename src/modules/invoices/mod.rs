// Invoices module

pub mod models;
pub mod services;

pub use models::{Company, InstallmentLine, Invoice, InvoiceId};
pub use services::{match_installments, InvoiceWorkflow, PassThroughWorkflow};
