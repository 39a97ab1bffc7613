pub mod aggregator;
pub mod collector;
pub mod commission_engine;
pub mod commission_service;
pub mod line_materializer;

pub use aggregator::{aggregate, CommissionGroup};
pub use collector::CommissionCollector;
pub use commission_engine::CommissionEngine;
pub use commission_service::{CommissionService, ProcessOutcome};
pub use line_materializer::LineMaterializer;
