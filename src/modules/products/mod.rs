pub mod models;

pub use models::{AccountId, Product, ProductId, TaxId};
