use serde::{Deserialize, Serialize};

use crate::modules::products::models::Product;

/// Configuration the line materializer reads, passed in explicitly per batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSettings {
    /// Service product booked on commission lines
    pub commission_product: Option<Product>,
}

impl CommissionSettings {
    pub fn new(commission_product: Option<Product>) -> Self {
        Self { commission_product }
    }
}
