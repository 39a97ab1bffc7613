mod commission_type;
mod rate_line;

pub use commission_type::{CategoryId, CommissionType, CommissionTypeCategory, CommissionTypeId};
pub use rate_line::{RateLine, RateLineId, RATE_SCALE};
