mod installment_line;
mod invoice;

pub use installment_line::{InstallmentLine, MoveLineId};
pub use invoice::{Company, CompanyId, Invoice, InvoiceId};
