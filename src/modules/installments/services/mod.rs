mod installment_scheduler;

pub use installment_scheduler::{InstallmentScheduler, PaymentTermScheduler};
