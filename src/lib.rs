//! Voting maintenance - database configuration and party logo upkeep
//!
//! Resolves the voting application's database settings from the
//! environment and rewrites the logo paths stored on political parties.
//!
//! # Layers
//!
//! - **cli**: Command-line arguments and the confirmation prompt
//! - **commands**: Show and update command implementations
//! - **config**: Profiles and environment-derived settings
//! - **context**: Application context (config plus open connection)
//! - **domain**: Parties and the logo mapping
//! - **services**: Logo update and listing use cases
//! - **infra**: Database connection and party repository
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Ask for confirmation, then update logo paths
//! cargo run
//!
//! # List current logo paths
//! cargo run -- --show
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::{Config, Profile};
pub use context::AppContext;
pub use domain::{LogoMapping, Party, UpdateSummary};
pub use errors::{AppError, AppResult};
