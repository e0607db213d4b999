use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use matchstats::h2h::WriteBatch;
use matchstats::{AccountResolver, H2HRecord, H2HRepository, InMemoryH2HRepository, StatsError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// In-memory store that counts commits and the size of each batch
#[derive(Clone, Default)]
pub struct CountingRepository {
    pub inner: Arc<InMemoryH2HRepository>,
    commits: Arc<AtomicUsize>,
    largest_batch: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn largest_batch(&self) -> usize {
        self.largest_batch.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl H2HRepository for CountingRepository {
    async fn get(&self, key: &str) -> Result<Option<H2HRecord>, StatsError> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, record: &H2HRecord) -> Result<(), StatsError> {
        self.inner.put(key, record).await
    }

    async fn commit(&self, batch: WriteBatch) -> Result<usize, StatsError> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        self.largest_batch.fetch_max(batch.len(), Ordering::SeqCst);
        self.inner.commit(batch).await
    }
}

/// Resolver whose every lookup fails at the I/O layer
#[allow(dead_code)]
pub struct FailingResolver;

#[async_trait]
impl AccountResolver for FailingResolver {
    async fn resolve(&self, _external_id: &str) -> Result<Option<String>, StatsError> {
        Err(StatsError::Resolver("connection refused".to_string()))
    }
}
