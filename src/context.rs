//! Application context for code running outside the web application.
//!
//! Holds the resolved configuration and an open database connection.
//! Acquire it with [`AppContext::create`] and release it with
//! [`AppContext::close`], or let [`AppContext::scope`] do both.

use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, PartyRepository, PartyStore};

/// Scoped handle to configuration and database connectivity
pub struct AppContext {
    config: Config,
    db: Database,
    parties: Arc<PartyStore>,
}

impl AppContext {
    /// Connect to the configured database and verify it answers.
    pub async fn create(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.ping().await?;
        tracing::info!(profile = %config.profile, "Application context ready");

        let parties = Arc::new(PartyStore::new(db.get_connection()));
        Ok(Self {
            config,
            db,
            parties,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get party repository
    pub fn parties(&self) -> Arc<dyn PartyRepository> {
        self.parties.clone()
    }

    /// Release the database connection.
    pub async fn close(self) -> AppResult<()> {
        drop(self.parties);
        self.db.close().await?;
        tracing::debug!("Application context closed");
        Ok(())
    }

    /// Run `f` inside a fresh context, closing it afterwards whether or not
    /// `f` succeeded. An error from `f` takes precedence over a close error.
    pub async fn scope<F, Fut, T>(config: Config, f: F) -> AppResult<T>
    where
        F: FnOnce(Arc<dyn PartyRepository>) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let ctx = Self::create(config).await?;
        tracing::debug!(debug = ctx.config().debug, "Entering application context");
        let result = f(ctx.parties()).await;

        match ctx.close().await {
            Ok(()) => result,
            Err(close_err) => {
                if result.is_err() {
                    tracing::warn!("Failed to close application context: {}", close_err);
                    result
                } else {
                    Err(close_err)
                }
            }
        }
    }
}
