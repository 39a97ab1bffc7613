use crate::modules::commission_types::models::RateLine;
use crate::modules::sales::models::Sale;

/// Decides whether a rate line applies to a given sale.
///
/// Implementations must be free of side effects; a line that does not apply
/// is simply left out of commission generation for that sale.
pub trait Applicability: Send + Sync {
    fn is_applicable(&self, line: &RateLine, sale: &Sale) -> bool;
}

/// Every rate line applies to every sale
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysApplicable;

impl Applicability for AlwaysApplicable {
    fn is_applicable(&self, _line: &RateLine, _sale: &Sale) -> bool {
        true
    }
}

/// A rate line applies only when the sale sells something of its category
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryApplicability;

impl Applicability for CategoryApplicability {
    fn is_applicable(&self, line: &RateLine, sale: &Sale) -> bool {
        sale.categories.contains(&line.category_id)
    }
}
