use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::rank_entry::RankEntry;

/// Content hash of a ranked listing.
///
/// Computed over the entries in canonical order (count descending, then word
/// ascending), so two listings holding the same counts share a version no
/// matter how ties were arranged by the sorter or in what order the words
/// were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingVersion(String);

impl ListingVersion {
    pub fn from_entries(entries: &[RankEntry]) -> Self {
        let mut canonical: Vec<&RankEntry> = entries.iter().collect();
        canonical.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

        let mut hasher = Sha256::new();
        for entry in canonical {
            // Length prefix keeps "ab" + "c" distinct from "a" + "bc".
            let line = format!("{}:{}:{}\n", entry.word.len(), entry.word, entry.count);
            hasher.update(line.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ListingVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
