//! update-logos - Application entry point
//!
//! Lists or rewrites the logo paths stored on political parties.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voting_maintenance::{
    cli::{Cli, Mode},
    commands,
    config::{Config, Profile},
    errors::AppResult,
};

#[tokio::main]
async fn main() {
    // Load .env before parsing so env-backed flags see it
    let cli = Cli::parse_with_env_file(None, std::env::args_os()).unwrap_or_else(|e| e.exit());

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    if !cli.ignored.is_empty() {
        tracing::debug!(args = ?cli.ignored, "Ignoring unrecognized arguments");
    }

    let profile: Profile = cli.profile.parse()?;
    let config = Config::from_env(profile);
    tracing::debug!(?config, "Configuration loaded");

    match cli.mode() {
        Mode::Show => commands::show::execute(config).await,
        Mode::Update => commands::update::execute(config).await,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
