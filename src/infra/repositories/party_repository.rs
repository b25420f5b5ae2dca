//! Party repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set, TransactionTrait,
    Unchanged,
};

use super::entities::party::{ActiveModel, Entity as PartyEntity};
use crate::domain::{LogoChange, Party};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Party repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PartyRepository: Send + Sync {
    /// List every party, in whatever order the database returns them
    async fn list(&self) -> AppResult<Vec<Party>>;

    /// Write all logo changes in a single transaction and commit it.
    ///
    /// Nothing is persisted if any assignment or the commit fails.
    async fn save_logo_changes(&self, changes: Vec<LogoChange>) -> AppResult<()>;
}

/// Concrete implementation of PartyRepository
pub struct PartyStore {
    db: DatabaseConnection,
}

impl PartyStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn apply_changes(txn: &DatabaseTransaction, changes: &[LogoChange]) -> AppResult<()> {
        for change in changes {
            let active = ActiveModel {
                id: Unchanged(change.party_id),
                logo: Set(Some(change.new_path.clone())),
                ..Default::default()
            };
            active.update(txn).await.map_err(AppError::from)?;
        }
        Ok(())
    }
}

#[async_trait]
impl PartyRepository for PartyStore {
    async fn list(&self) -> AppResult<Vec<Party>> {
        let models = PartyEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Party::from).collect())
    }

    async fn save_logo_changes(&self, changes: Vec<LogoChange>) -> AppResult<()> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        match Self::apply_changes(&txn, &changes).await {
            Ok(()) => {
                txn.commit().await.map_err(AppError::from)?;
                tracing::debug!(count = changes.len(), "Logo changes committed");
                Ok(())
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
