//! Application-wide constants
//!
//! Defaults applied when the corresponding environment variable is absent.

// =============================================================================
// Security
// =============================================================================

/// Default secret key (development only)
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

// =============================================================================
// Database
// =============================================================================

/// Default database user
pub const DEFAULT_DB_USER: &str = "postgres";

/// Default database password
pub const DEFAULT_DB_PASSWORD: &str = "postgres";

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default database port
pub const DEFAULT_DB_PORT: &str = "5432";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "voting_db";

/// URI scheme used when the connection string is assembled from components
pub const DATABASE_SCHEME: &str = "postgresql";

// =============================================================================
// Environment variable names
// =============================================================================

pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_NAME: &str = "DB_NAME";

/// Selects the configuration profile when `--profile` is not given
pub const ENV_PROFILE: &str = "APP_PROFILE";

// =============================================================================
// Profiles
// =============================================================================

pub const PROFILE_DEVELOPMENT: &str = "development";
pub const PROFILE_PRODUCTION: &str = "production";

/// Alias resolving to the development profile
pub const PROFILE_DEFAULT: &str = "default";

/// All accepted profile names
pub const VALID_PROFILES: &[&str] = &[PROFILE_DEVELOPMENT, PROFILE_PRODUCTION, PROFILE_DEFAULT];
