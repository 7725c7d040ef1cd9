pub mod config;
pub mod display;
pub mod normalize;
pub mod stop_words;

use log::debug;

use crate::ranking::RankSorter;
use crate::trie::FrequencyTrie;
use crate::types::{ConfigError, RankEntry, RankedListing};
pub use config::CountConfig;
pub use display::format_listing;
pub use normalize::{EdgeTrimNormalizer, TokenNormalizer};
pub use stop_words::StopWords;

/// Counts raw tokens into two populations and ranks them.
///
/// `all` sees every normalized token. `filtered` sees the same tokens minus
/// stop words (or everything, when stop word filtering is off). Tokens that
/// normalize to the empty string are dropped.
pub struct WordCounter<N = EdgeTrimNormalizer> {
    config: CountConfig,
    normalizer: N,
    stop_words: StopWords,
    sorter: RankSorter,
    all: FrequencyTrie,
    filtered: FrequencyTrie,
}

impl WordCounter<EdgeTrimNormalizer> {
    /// Counter using [`EdgeTrimNormalizer`] and no stop words.
    pub fn with_config(config: CountConfig) -> Result<Self, ConfigError> {
        let normalizer = EdgeTrimNormalizer {
            lowercase: config.lowercase,
        };
        Self::new(config, normalizer, StopWords::new())
    }
}

impl Default for WordCounter<EdgeTrimNormalizer> {
    fn default() -> Self {
        Self {
            config: CountConfig::v0(),
            normalizer: EdgeTrimNormalizer::default(),
            stop_words: StopWords::new(),
            sorter: RankSorter::default(),
            all: FrequencyTrie::new(),
            filtered: FrequencyTrie::new(),
        }
    }
}

impl<N> WordCounter<N>
where
    N: TokenNormalizer,
{
    pub fn new(config: CountConfig, normalizer: N, stop_words: StopWords) -> Result<Self, ConfigError> {
        let sorter = config.sorter()?;
        Ok(Self {
            config,
            normalizer,
            stop_words,
            sorter,
            all: FrequencyTrie::new(),
            filtered: FrequencyTrie::new(),
        })
    }

    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Count one raw token.
    pub fn observe(&mut self, raw: &str) {
        let word = self.normalizer.normalize(raw);
        if word.is_empty() {
            return;
        }
        self.all.increment(&word);
        if !self.is_stop_word(&word) {
            self.filtered.increment(&word);
        }
    }

    /// Count every whitespace-separated token of `text`.
    pub fn observe_text(&mut self, text: &str) {
        for raw in text.split_whitespace() {
            self.observe(raw);
        }
    }

    /// Undo one [`observe`](Self::observe) of `raw`. No-op if it was never
    /// counted.
    pub fn forget(&mut self, raw: &str) {
        let word = self.normalizer.normalize(raw);
        self.all.decrement(&word);
        self.filtered.decrement(&word);
    }

    /// Filtered population in non-increasing count order.
    pub fn ranked(&self) -> Vec<RankEntry> {
        self.rank(&self.filtered)
    }

    /// Every counted word, stop words included, in non-increasing count order.
    pub fn ranked_all(&self) -> Vec<RankEntry> {
        self.rank(&self.all)
    }

    /// The `limit` highest ranked filtered words.
    ///
    /// Asking for more words than the filtered population holds returns the
    /// whole unfiltered ranking instead, so a renderer always has something
    /// to fill the requested slots with.
    pub fn top(&self, limit: usize) -> Vec<RankEntry> {
        let mut ranked = self.ranked();
        if limit > ranked.len() {
            debug!(
                "requested {limit} words but only {} filtered; using the full population",
                ranked.len()
            );
            return self.ranked_all();
        }
        ranked.truncate(limit);
        ranked
    }

    /// Freeze the filtered ranking into a serializable listing.
    pub fn snapshot(&self) -> RankedListing {
        let listing = RankedListing::new(self.ranked(), self.filtered.node_count());
        debug!(
            "snapshot {}: {} distinct word(s), {} occurrence(s)",
            listing.version.as_str(),
            listing.distinct_words,
            listing.total_count
        );
        listing
    }

    /// Number of distinct words in the filtered population.
    pub fn distinct_words(&self) -> usize {
        live_entries(&self.filtered).count()
    }

    /// Total occurrences counted in the filtered population.
    pub fn total_count(&self) -> u64 {
        live_entries(&self.filtered).map(|e| e.count).sum()
    }

    pub fn filtered_trie(&self) -> &FrequencyTrie {
        &self.filtered
    }

    pub fn all_trie(&self) -> &FrequencyTrie {
        &self.all
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.config.filter_stop_words && self.stop_words.contains(word)
    }

    fn rank(&self, trie: &FrequencyTrie) -> Vec<RankEntry> {
        let mut entries: Vec<RankEntry> = live_entries(trie).collect();
        self.sorter.sort(&mut entries);
        entries
    }
}

/// Enumerated entries with the zero-count leaf quirk filtered out.
fn live_entries(trie: &FrequencyTrie) -> impl Iterator<Item = RankEntry> {
    trie.enumerate().into_iter().filter(|e| e.count > 0)
}
