//! Show command - Lists current party logo paths.

use std::io;

use crate::config::Config;
use crate::context::AppContext;
use crate::domain::default_logo_mapping;
use crate::errors::AppResult;
use crate::services::LogoMaintainer;

/// Execute the show command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::debug!("Listing current logos...");

    let listed = AppContext::scope(config, |parties| async move {
        let service = LogoMaintainer::new(parties, default_logo_mapping());
        let mut out = io::stdout();
        let result = service.show_current_logos(&mut out).await;
        result
    })
    .await?;

    tracing::debug!(count = listed.len(), "Listing complete");
    Ok(())
}
