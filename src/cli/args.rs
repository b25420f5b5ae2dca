//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;

use crate::config::{ENV_PROFILE, PROFILE_DEFAULT};

/// Update the logo paths stored for political parties
#[derive(Parser, Debug)]
#[command(name = "update-logos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List the current logo paths without changing anything
    ///
    /// Only the bare flag counts; `--show=<value>` falls through to the prompt.
    #[arg(
        long,
        visible_alias = "mostrar",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "",
        value_name = "IGNORED"
    )]
    pub show: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration profile: development, production or default
    #[arg(short, long, env = ENV_PROFILE, default_value = PROFILE_DEFAULT)]
    pub profile: String,

    /// Anything else on the command line is ignored
    #[arg(
        hide = true,
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub ignored: Vec<String>,
}

/// What a run of the tool will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the current logo paths
    Show,
    /// Ask for confirmation, then rewrite logo paths
    Update,
}

impl Cli {
    /// Load environment variables from an env file, then parse `args`.
    ///
    /// The file is read first so that variables defined there (such as the
    /// profile selector) feed clap's `env` fallbacks. With no path, `.env`
    /// in the working directory is used if present. Variables already set in
    /// the process environment win over the file.
    pub fn parse_with_env_file<I, T>(env_file: Option<&Path>, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let loaded = match env_file {
            Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
            None => dotenvy::dotenv(),
        };
        if let Err(e) = loaded {
            if !e.not_found() {
                eprintln!("Ignoring unreadable env file: {}", e);
            }
        }

        Self::try_parse_from(args)
    }

    pub fn mode(&self) -> Mode {
        match self.show.as_deref() {
            Some("") => Mode::Show,
            _ => Mode::Update,
        }
    }
}
