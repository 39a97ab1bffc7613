pub mod commission_types;
pub mod commissions;
pub mod installments;
pub mod invoices;
pub mod parties;
pub mod products;
pub mod sales;
