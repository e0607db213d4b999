use chrono::Utc;
use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    AccountResolver, H2HRecord, H2HRepository, H2HSyncSummary, Tally, WriteBatch,
    DEFAULT_BATCH_CAP,
};
use crate::matches::MatchRecord;
use crate::stats::StatsError;

/// Recomputes and serves head-to-head records
pub struct H2HService {
    repository: Arc<dyn H2HRepository>,
    resolver: Arc<dyn AccountResolver>,
    batch_cap: usize,
}

impl H2HService {
    pub fn new(repository: Arc<dyn H2HRepository>, resolver: Arc<dyn AccountResolver>) -> Self {
        Self {
            repository,
            resolver,
            batch_cap: DEFAULT_BATCH_CAP,
        }
    }

    pub fn with_batch_cap(mut self, batch_cap: usize) -> Self {
        self.batch_cap = batch_cap.max(1);
        self
    }

    pub fn batch_cap(&self) -> usize {
        self.batch_cap
    }

    /// Reads the record for `{a, b}`; argument order does not matter
    #[instrument(skip(self))]
    pub async fn get_h2h(&self, a: &str, b: &str) -> Result<Option<H2HRecord>, StatsError> {
        if a == b {
            return Ok(None);
        }
        self.repository.get(&H2HRecord::key(a, b)).await
    }

    /// Rebuilds every record between `user_id` and the registered opponents in
    /// `matches`, overwriting what is stored.
    ///
    /// At most `batch_cap` pairs are written per run; the rest are reported
    /// in `dropped_pairs` and picked up by a later run.
    #[instrument(skip(self, matches), fields(match_count = matches.len()))]
    pub async fn compute_for_user(
        &self,
        user_id: &str,
        matches: &[MatchRecord],
    ) -> Result<H2HSyncSummary, StatsError> {
        validate_user_id(user_id)?;

        let groups = group_by_opponent(matches);
        let mut summary = H2HSyncSummary {
            opponents_seen: groups.len(),
            ..H2HSyncSummary::default()
        };

        if groups.is_empty() {
            debug!(user_id = %user_id, "No registered opponents to aggregate");
            return Ok(summary);
        }

        let lookups = groups
            .keys()
            .map(|external_id| self.resolve_or_skip(external_id));
        let accounts = join_all(lookups).await;

        // Keyed by account so two identifiers for one account share a record
        let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
        for ((external_id, group), account) in groups.iter().zip(accounts) {
            match account {
                None => summary.unresolved += 1,
                Some(account_id) if account_id == user_id => {
                    summary.self_pairs += 1;
                    debug!(
                        user_id = %user_id,
                        external_id = %external_id,
                        "Opponent identifier resolves to the acting user, skipping"
                    );
                }
                Some(account_id) => {
                    let tally = tallies.entry(account_id).or_default();
                    for record in group {
                        tally.record(record.result);
                    }
                }
            }
        }

        let updated_at = Utc::now();
        let mut batch = WriteBatch::with_cap(self.batch_cap);
        for (opponent_id, tally) in &tallies {
            if tally.total() == 0 {
                continue;
            }
            let record = H2HRecord::from_perspective(user_id, opponent_id, tally, updated_at);
            batch.stage(record.storage_key(), record);
        }

        summary.dropped_pairs = batch.dropped();
        if summary.dropped_pairs > 0 {
            warn!(
                user_id = %user_id,
                dropped = summary.dropped_pairs,
                cap = self.batch_cap,
                "Batch cap reached, remaining pairs wait for the next run"
            );
        }

        if batch.is_empty() {
            debug!(user_id = %user_id, "Nothing staged, skipping commit");
            return Ok(summary);
        }

        summary.pairs_written = self.repository.commit(batch).await?;

        info!(
            user_id = %user_id,
            pairs_written = summary.pairs_written,
            unresolved = summary.unresolved,
            "H2H records recomputed"
        );

        Ok(summary)
    }

    async fn resolve_or_skip(&self, external_id: &str) -> Option<String> {
        match self.resolver.resolve(external_id).await {
            Ok(account) => account,
            Err(err) => {
                warn!(?err, external_id = %external_id, "Opponent lookup failed, treating as unresolved");
                None
            }
        }
    }
}

pub(crate) fn validate_user_id(user_id: &str) -> Result<(), StatsError> {
    if user_id.trim().is_empty() {
        return Err(StatsError::Validation("user id must not be blank".to_string()));
    }
    Ok(())
}

fn group_by_opponent(matches: &[MatchRecord]) -> BTreeMap<&str, Vec<&MatchRecord>> {
    let mut groups: BTreeMap<&str, Vec<&MatchRecord>> = BTreeMap::new();
    for record in matches {
        if let Some(opponent) = record.opponent_id() {
            groups.entry(opponent).or_default().push(record);
        }
    }
    groups
}
