mod product;

pub use product::{AccountId, Product, ProductId, TaxId};
