mod applicability;
mod rate_table;

pub use applicability::{AlwaysApplicable, Applicability, CategoryApplicability};
pub use rate_table::RateTable;
