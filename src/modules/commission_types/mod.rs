pub mod models;
pub mod services;

pub use models::{CategoryId, CommissionType, CommissionTypeCategory, CommissionTypeId, RateLine, RateLineId};
pub use services::{AlwaysApplicable, Applicability, CategoryApplicability, RateTable};
