//! Commands module - CLI command implementations.
//!
//! Each mode of the tool is implemented in its own module.

pub mod show;
pub mod update;
