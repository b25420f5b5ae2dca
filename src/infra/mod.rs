//! Infrastructure layer - External systems integration
//!
//! - Database connection management
//! - Party repository over SeaORM entities

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{PartyRepository, PartyStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockPartyRepository;
