//! Application settings resolved from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::constants::{
    DATABASE_SCHEME, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT,
    DEFAULT_DB_USER, DEFAULT_SECRET_KEY, ENV_DATABASE_URL, ENV_DB_HOST, ENV_DB_NAME,
    ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_USER, ENV_SECRET_KEY, PROFILE_DEFAULT,
    PROFILE_DEVELOPMENT, PROFILE_PRODUCTION, VALID_PROFILES,
};
use crate::errors::AppError;

/// Everything except RFC 3986 unreserved characters gets escaped.
const USERINFO_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Named configuration variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    /// Look up a profile by name. `"default"` aliases to development.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            PROFILE_DEVELOPMENT | PROFILE_DEFAULT => Some(Profile::Development),
            PROFILE_PRODUCTION => Some(Profile::Production),
            _ => None,
        }
    }

    /// Whether debug mode is enabled under this profile
    pub fn debug_enabled(&self) -> bool {
        matches!(self, Profile::Development)
    }
}

impl FromStr for Profile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::from_name(s).ok_or_else(|| {
            AppError::config(format!(
                "unknown profile '{}' (expected one of: {})",
                s,
                VALID_PROFILES.join(", ")
            ))
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Development => write!(f, "{}", PROFILE_DEVELOPMENT),
            Profile::Production => write!(f, "{}", PROFILE_PRODUCTION),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    secret_key: String,
    pub database_url: String,
    pub track_modifications: bool,
    pub debug: bool,
    pub profile: Profile,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"[REDACTED]")
            .field("database_url", &"[REDACTED]")
            .field("track_modifications", &self.track_modifications)
            .field("debug", &self.debug)
            .field("profile", &self.profile)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory, if present, is loaded first.
    /// Missing variables fall back to defaults; this never fails.
    pub fn from_env(profile: Profile) -> Self {
        dotenvy::dotenv().ok();
        Self::resolve(profile, |key| env::var(key).ok())
    }

    /// Resolve configuration for `profile` using `lookup` to read variables.
    pub fn resolve<F>(profile: Profile, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = match lookup(ENV_DATABASE_URL) {
            Some(url) if !url.is_empty() => url,
            _ => build_database_url(
                &var(ENV_DB_USER, DEFAULT_DB_USER),
                &var(ENV_DB_PASSWORD, DEFAULT_DB_PASSWORD),
                &var(ENV_DB_HOST, DEFAULT_DB_HOST),
                &var(ENV_DB_PORT, DEFAULT_DB_PORT),
                &var(ENV_DB_NAME, DEFAULT_DB_NAME),
            ),
        };

        Self {
            secret_key: var(ENV_SECRET_KEY, DEFAULT_SECRET_KEY),
            database_url,
            track_modifications: false,
            debug: profile.debug_enabled(),
            profile,
        }
    }

    /// Resolve configuration by profile name.
    pub fn for_profile_name<F>(name: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = name.parse::<Profile>()?;
        Ok(Self::resolve(profile, lookup))
    }

    /// Get the secret key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

/// Assemble a PostgreSQL connection string, percent-encoding the password.
pub(crate) fn build_database_url(
    user: &str,
    password: &str,
    host: &str,
    port: &str,
    name: &str,
) -> String {
    let encoded_password = utf8_percent_encode(password, USERINFO_ENCODE_SET);
    format!(
        "{}://{}:{}@{}:{}/{}",
        DATABASE_SCHEME, user, encoded_password, host, port, name
    )
}
