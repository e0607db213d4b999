use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::stats::StatsError;

/// Maps an external opponent identifier to an internal account id
#[async_trait]
pub trait AccountResolver: Send + Sync {
    /// `Ok(None)` when the identifier belongs to no known account
    async fn resolve(&self, external_id: &str) -> Result<Option<String>, StatsError>;
}

/// In-memory identifier mapping for development and testing
#[derive(Debug, Default)]
pub struct InMemoryAccountResolver {
    accounts: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryAccountResolver {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_accounts<I, K, V>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            accounts: Arc::new(RwLock::new(
                accounts
                    .into_iter()
                    .map(|(external, account)| (external.into(), account.into()))
                    .collect(),
            )),
        }
    }

    pub async fn link(&self, external_id: impl Into<String>, account_id: impl Into<String>) {
        let external_id = external_id.into();
        let account_id = account_id.into();
        info!(external_id = %external_id, account_id = %account_id, "Linked external identifier");
        self.accounts.write().await.insert(external_id, account_id);
    }
}

#[async_trait]
impl AccountResolver for InMemoryAccountResolver {
    async fn resolve(&self, external_id: &str) -> Result<Option<String>, StatsError> {
        let result = self.accounts.read().await.get(external_id).cloned();
        debug!(external_id = %external_id, account_id = ?result, "External id lookup");
        Ok(result)
    }
}

/// PostgreSQL implementation backed by the `account_links` table
pub struct PostgresAccountResolver {
    pool: PgPool,
}

impl PostgresAccountResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountResolver for PostgresAccountResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, external_id: &str) -> Result<Option<String>, StatsError> {
        let row = sqlx::query("SELECT account_id FROM account_links WHERE external_id = $1")
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, external_id = %external_id, "Failed to resolve external id");
                StatsError::Resolver(e.to_string())
            })?;

        row.map(|row| row.try_get::<String, _>("account_id"))
            .transpose()
            .map_err(|e| StatsError::Resolver(e.to_string()))
    }
}
