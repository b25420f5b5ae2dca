//! Env file loading happens before argument parsing.
//!
//! Kept in its own test binary: loading the file mutates the process
//! environment, which would leak into other tests.

use std::io::Write;

use voting_maintenance::cli::{Cli, Mode};
use voting_maintenance::config::{Config, Profile};

#[test]
fn test_env_file_profile_and_database_url_both_applied() {
    // Values already in the process environment take precedence over the file
    let preset_profile = std::env::var("APP_PROFILE").ok();
    let preset_url = std::env::var("DATABASE_URL").ok();

    let mut env_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(env_file, "APP_PROFILE=production").unwrap();
    writeln!(env_file, "DATABASE_URL=postgres://from-file@db/votes").unwrap();
    env_file.flush().unwrap();

    let cli = Cli::parse_with_env_file(Some(env_file.path()), ["update-logos", "--show"]).unwrap();
    assert_eq!(cli.mode(), Mode::Show);

    let expected_profile = preset_profile.unwrap_or_else(|| "production".to_string());
    assert_eq!(cli.profile, expected_profile);

    let profile: Profile = cli.profile.parse().unwrap();
    let config = Config::from_env(profile);

    if expected_profile == "production" {
        assert_eq!(config.profile, Profile::Production);
        assert!(!config.debug);
    }
    match preset_url {
        Some(url) if !url.is_empty() => assert_eq!(config.database_url, url),
        _ => assert_eq!(config.database_url, "postgres://from-file@db/votes"),
    }
}

#[test]
fn test_missing_env_file_still_parses_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.env");

    let cli = Cli::parse_with_env_file(Some(&missing), ["update-logos", "--verbose"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.mode(), Mode::Update);
}
