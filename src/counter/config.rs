use serde::{Deserialize, Serialize};

use crate::ranking::{RankSorter, DEFAULT_INSERTION_THRESHOLD};
use crate::types::ConfigError;

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountConfig {
    pub insertion_threshold: usize,
    pub lowercase: bool,
    pub filter_stop_words: bool,
}

impl CountConfig {
    pub fn v0() -> Self {
        Self {
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
            lowercase: true,
            filter_stop_words: true,
        }
    }

    /// Build the sorter this configuration describes.
    pub fn sorter(&self) -> Result<RankSorter, ConfigError> {
        RankSorter::new(self.insertion_threshold)
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::v0()
    }
}
