//! Domain layer - Core business entities and logic
//!
//! Parties, their logo paths, and the mapping used to rewrite them.
//! No infrastructure dependencies.

pub mod logos;
pub mod party;

pub use logos::{default_logo_mapping, LogoMapping, DEFAULT_LOGOS};
pub use party::{LogoChange, Party, UpdateSummary};
