//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! keeping SeaORM entities out of the service layer.

pub(crate) mod entities;
mod party_repository;

pub use party_repository::{PartyRepository, PartyStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use party_repository::MockPartyRepository;
