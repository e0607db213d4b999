use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::{H2HRecord, DEFAULT_BATCH_CAP};
use crate::stats::StatsError;

/// Document store for head-to-head records.
///
/// Writes replace the whole record under a key; nothing is merged.
#[async_trait]
pub trait H2HRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<H2HRecord>, StatsError>;
    async fn put(&self, key: &str, record: &H2HRecord) -> Result<(), StatsError>;

    /// Applies every staged write or none of them; returns the number applied
    async fn commit(&self, batch: WriteBatch) -> Result<usize, StatsError>;
}

/// Overwrites staged for one atomic commit, bounded by a hard cap
#[derive(Debug, Clone)]
pub struct WriteBatch {
    cap: usize,
    writes: Vec<(String, H2HRecord)>,
    dropped: usize,
}

impl Default for WriteBatch {
    fn default() -> Self {
        Self::with_cap(DEFAULT_BATCH_CAP)
    }
}

impl WriteBatch {
    /// A cap below one is raised to one
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            writes: Vec::new(),
            dropped: 0,
        }
    }

    /// Stages a write; once the cap is reached the write is refused and counted
    pub fn stage(&mut self, key: String, record: H2HRecord) -> bool {
        if self.is_full() {
            self.dropped += 1;
            return false;
        }
        self.writes.push((key, record));
        true
    }

    pub fn is_full(&self) -> bool {
        self.writes.len() >= self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_writes(self) -> Vec<(String, H2HRecord)> {
        self.writes
    }
}

#[derive(Debug, Default)]
pub struct InMemoryH2HRepository {
    records: Arc<RwLock<HashMap<String, H2HRecord>>>,
}

impl InMemoryH2HRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// All records involving `user_id`
    pub async fn records_for(&self, user_id: &str) -> Vec<H2HRecord> {
        self.records
            .read()
            .await
            .values()
            .filter(|record| record.involves(user_id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl H2HRepository for InMemoryH2HRepository {
    async fn get(&self, key: &str) -> Result<Option<H2HRecord>, StatsError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, record: &H2HRecord) -> Result<(), StatsError> {
        self.records
            .write()
            .await
            .insert(key.to_string(), record.clone());
        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<usize, StatsError> {
        let mut records = self.records.write().await;
        let writes = batch.into_writes();
        let applied = writes.len();
        records.extend(writes);
        Ok(applied)
    }
}

const UPSERT_RECORD: &str = "INSERT INTO h2h_records (key, p1, p2, p1_wins, p2_wins, draws, total, updated_at) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
     ON CONFLICT (key) DO UPDATE SET p1 = EXCLUDED.p1, p2 = EXCLUDED.p2, p1_wins = EXCLUDED.p1_wins, \
     p2_wins = EXCLUDED.p2_wins, draws = EXCLUDED.draws, total = EXCLUDED.total, updated_at = EXCLUDED.updated_at";

/// PostgreSQL implementation of the head-to-head store
pub struct PostgresH2HRepository {
    pool: PgPool,
}

impl PostgresH2HRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn count_column(row: &PgRow, column: &str) -> Result<u32, StatsError> {
    let value: i64 = row
        .try_get(column)
        .map_err(|e| StatsError::Repository(e.to_string()))?;
    u32::try_from(value)
        .map_err(|_| StatsError::Repository(format!("{column} out of range: {value}")))
}

fn record_from_row(row: &PgRow) -> Result<H2HRecord, StatsError> {
    let text = |column: &str| -> Result<String, StatsError> {
        row.try_get(column)
            .map_err(|e| StatsError::Repository(e.to_string()))
    };

    Ok(H2HRecord {
        p1: text("p1")?,
        p2: text("p2")?,
        p1_wins: count_column(row, "p1_wins")?,
        p2_wins: count_column(row, "p2_wins")?,
        draws: count_column(row, "draws")?,
        total: count_column(row, "total")?,
        updated_at: row
            .try_get("updated_at")
            .map_err(|e| StatsError::Repository(e.to_string()))?,
    })
}

#[async_trait]
impl H2HRepository for PostgresH2HRepository {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<H2HRecord>, StatsError> {
        debug!(key = %key, "Fetching h2h record from database");

        let row = sqlx::query(
            "SELECT p1, p2, p1_wins, p2_wins, draws, total, updated_at FROM h2h_records WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, key = %key, "Failed to fetch h2h record");
            StatsError::Repository(e.to_string())
        })?;

        row.as_ref().map(record_from_row).transpose()
    }

    #[instrument(skip(self, record))]
    async fn put(&self, key: &str, record: &H2HRecord) -> Result<(), StatsError> {
        sqlx::query(UPSERT_RECORD)
            .bind(key)
            .bind(&record.p1)
            .bind(&record.p2)
            .bind(i64::from(record.p1_wins))
            .bind(i64::from(record.p2_wins))
            .bind(i64::from(record.draws))
            .bind(i64::from(record.total))
            .bind(record.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, key = %key, "Failed to write h2h record");
                StatsError::Repository(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self, batch), fields(staged = batch.len()))]
    async fn commit(&self, batch: WriteBatch) -> Result<usize, StatsError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StatsError::Repository(e.to_string()))?;

        let writes = batch.into_writes();
        for (key, record) in &writes {
            sqlx::query(UPSERT_RECORD)
                .bind(key)
                .bind(&record.p1)
                .bind(&record.p2)
                .bind(i64::from(record.p1_wins))
                .bind(i64::from(record.p2_wins))
                .bind(i64::from(record.draws))
                .bind(i64::from(record.total))
                .bind(record.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    warn!(error = %e, key = %key, "Failed to stage h2h record");
                    StatsError::Repository(e.to_string())
                })?;
        }

        tx.commit().await.map_err(|e| {
            warn!(error = %e, "Failed to commit h2h batch");
            StatsError::Repository(e.to_string())
        })?;

        debug!(applied = writes.len(), "H2H batch committed");
        Ok(writes.len())
    }
}
