//! Mutual-friend entity and the friend-id chunking rule.

use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// Mutual-friend overlap for one queried friend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutualEntry {
    /// The queried friend's id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Ids shared between the subject and this friend.
    #[serde(default)]
    pub common_friends: Option<Vec<i64>>,
}

impl MutualEntry {
    /// Number of friends shared with the subject.
    #[must_use]
    pub fn common_count(&self) -> usize {
        self.common_friends.as_ref().map_or(0, Vec::len)
    }
}

/// Partitions queryable friend ids into fixed-size chunks.
///
/// Deactivated and closed profiles are dropped first; chunk boundaries
/// follow a running counter over the survivors, not any property of the
/// ids themselves.
#[must_use]
pub fn chunk_available_ids(friends: &[Profile], chunk_size: usize) -> Vec<Vec<i64>> {
    if chunk_size == 0 {
        return Vec::new();
    }
    let available: Vec<i64> = friends
        .iter()
        .filter(|friend| friend.is_available())
        .map(|friend| friend.id)
        .collect();
    available.chunks(chunk_size).map(<[i64]>::to_vec).collect()
}
