//! Application services layer - Use cases.
//!
//! Services depend on repository traits, not SeaORM, so they can be
//! exercised against mocks.

mod logo_service;

pub use logo_service::{LogoMaintainer, NO_LOGO_PLACEHOLDER};
