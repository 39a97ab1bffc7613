pub mod models;
pub mod services;

pub use models::{ComputedInstallment, PaymentTerm, PaymentTermLine, PaymentTermLineKind};
pub use services::{InstallmentScheduler, PaymentTermScheduler};
