//! CLI module - Command-line interface for the application.
//!
//! - `update-logos` - confirm, then rewrite party logo paths
//! - `update-logos --show` - list current logo paths

pub mod args;
pub mod prompt;

pub use args::{Cli, Mode};
pub use prompt::{confirm, should_proceed};
