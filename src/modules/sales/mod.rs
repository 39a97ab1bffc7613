pub mod models;
pub mod services;

pub use models::{Sale, SaleId, SaleState};
pub use services::{change_customer, change_middleman, commission_type_for, derive_defaults, SaleDefaults};
