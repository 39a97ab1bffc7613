mod accounting_line;
mod commission_record;
mod settings;

pub use accounting_line::{AccountingLine, InvoiceType, NewAccountingLine};
pub use commission_record::{CommissionPair, CommissionRecord, GroupKey};
pub use settings::CommissionSettings;
