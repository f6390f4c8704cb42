//! Mutual-friend loading use case.
//!
//! Mutual overlaps are queried per chunk of friend ids, and the results
//! stream back as a pull-based sequence rather than one big batch.

use std::collections::VecDeque;
use std::sync::Arc;

use kindred_domain::{ApiResult, FriendRoster, MutualEntry, Target};

use super::load_payload;
use crate::fetcher::Fetcher;
use crate::ports::HttpClient;

/// Builds lazy mutual-friend batch sequences.
pub struct MutualLoader<C: HttpClient> {
    fetcher: Arc<Fetcher<C>>,
}

impl<C: HttpClient + 'static> MutualLoader<C> {
    /// Creates the use case over a shared fetcher.
    pub fn new(fetcher: Arc<Fetcher<C>>) -> Self {
        Self { fetcher }
    }

    /// Prepares the batch sequence for a roster.
    ///
    /// Deactivated and closed friends are dropped and the survivors are
    /// partitioned into chunks of `mutual_chunk_size` ids. `route` turns
    /// each chunk into a ready-to-fetch target, keeping URL construction
    /// with the caller.
    pub fn batches<F>(&self, roster: &FriendRoster, route: F) -> MutualBatches<C, F>
    where
        F: Fn(&[i64]) -> Target,
    {
        let chunks = roster.chunked_ids(self.fetcher.settings().mutual_chunk_size);
        MutualBatches {
            fetcher: Arc::clone(&self.fetcher),
            chunks: chunks.into(),
            route,
        }
    }
}

/// Pull-based, single-pass sequence of mutual-friend batches.
///
/// Each chunk is fetched at most once; the sequence is not restartable.
pub struct MutualBatches<C: HttpClient, F> {
    fetcher: Arc<Fetcher<C>>,
    chunks: VecDeque<Vec<i64>>,
    route: F,
}

impl<C, F> MutualBatches<C, F>
where
    C: HttpClient + 'static,
    F: Fn(&[i64]) -> Target,
{
    /// Chunks not yet fetched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chunks.len()
    }

    /// Fetches the next chunk, `None` once the sequence is drained.
    pub async fn next_batch(&mut self) -> Option<ApiResult<Vec<MutualEntry>>> {
        let chunk = self.chunks.pop_front()?;
        let target = (self.route)(&chunk);
        Some(load_payload(&self.fetcher, &target, "friends.getMutual").await)
    }

    /// Drains the sequence into `(friend_id, mutual_count)` pairs,
    /// skipping entries that carry no id.
    ///
    /// # Errors
    ///
    /// The first failed chunk ends the drain with its pipeline error.
    pub async fn collect_counts(mut self) -> ApiResult<Vec<(i64, usize)>> {
        let mut counts = Vec::new();
        while let Some(batch) = self.next_batch().await {
            for entry in batch? {
                if let Some(id) = entry.id {
                    counts.push((id, entry.common_count()));
                }
            }
        }
        Ok(counts)
    }
}
