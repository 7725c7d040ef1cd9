use serde::{Deserialize, Serialize};

/// A `(word, count)` pair produced by trie enumeration.
///
/// Entries are regenerated on every enumeration; nothing holds on to them
/// between calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankEntry {
    pub word: String,
    pub count: u64,
}

impl RankEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
