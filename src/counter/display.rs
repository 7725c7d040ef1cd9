use crate::types::RankEntry;

/// One `word:count` line per entry, in the order given.
pub fn format_listing(entries: &[RankEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}:{}\n", entry.word, entry.count))
        .collect()
}
