mod payment_term;

pub use payment_term::{ComputedInstallment, PaymentTerm, PaymentTermLine, PaymentTermLineKind};
