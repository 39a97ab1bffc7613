mod defaults;

pub use defaults::{change_customer, change_middleman, commission_type_for, derive_defaults, SaleDefaults};
