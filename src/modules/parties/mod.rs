pub mod models;
pub mod services;

pub use models::{Party, PartyId, PartyRole};
pub use services::PartyDirectory;
