use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rank_entry::RankEntry;
use super::version::ListingVersion;

/// A frozen, serializable view of a ranked word population.
///
/// Field order is part of the output contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedListing {
    pub version: ListingVersion,
    pub created_at: DateTime<Utc>, // informational only
    pub distinct_words: usize,
    pub total_count: u64,
    pub node_count: usize,
    pub entries: Vec<RankEntry>,
}

impl RankedListing {
    /// Wrap an already ranked entry list.
    ///
    /// `entries` is expected to be in non-increasing count order; the
    /// version does not depend on that order.
    pub fn new(entries: Vec<RankEntry>, node_count: usize) -> Self {
        let total_count = entries.iter().map(|e| e.count).sum();
        Self {
            version: ListingVersion::from_entries(&entries),
            created_at: Utc::now(),
            distinct_words: entries.len(),
            total_count,
            node_count,
            entries,
        }
    }

    /// The first `limit` entries, or all of them if there are fewer.
    pub fn head(&self, limit: usize) -> &[RankEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }
}
