//! Application configuration module
//!
//! Resolves settings from environment variables, per profile.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{Config, Profile};
