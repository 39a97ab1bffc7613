mod party;

pub use party::{Party, PartyId, PartyRole};
