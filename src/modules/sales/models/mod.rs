mod sale;

pub use sale::{Sale, SaleId, SaleState};
