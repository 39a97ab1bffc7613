//! Sale commission engine
//!
//! Computes the commissions owed to middlemen on paid invoice installments and
//! books them as supplier invoice lines, once per installment.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::commission_types;
pub use modules::commissions;
pub use modules::installments;
pub use modules::invoices;
pub use modules::parties;
pub use modules::products;
pub use modules::sales;
