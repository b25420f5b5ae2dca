//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod party;

#[allow(unused_imports)]
pub use party::{ActiveModel as PartyActiveModel, Entity as PartyEntity, Model as PartyModel};
