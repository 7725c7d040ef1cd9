pub mod insertion;
mod partition;

use log::trace;

use crate::types::ConfigError;
use crate::types::RankEntry;
pub use insertion::insertion_sort;
use partition::partition;
pub use partition::MIN_PARTITION_LEN;

/// Span length below which [`RankSorter`] switches to insertion sort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 10;

/// Anything the sorter can rank.
pub trait Counted {
    fn count(&self) -> u64;
}

impl Counted for RankEntry {
    fn count(&self) -> u64 {
        self.count
    }
}

impl Counted for u64 {
    fn count(&self) -> u64 {
        *self
    }
}

impl<W> Counted for (W, u64) {
    fn count(&self) -> u64 {
        self.1
    }
}

/// Hybrid quicksort / insertion sort into non-increasing count order.
///
/// Order among equal counts is unspecified. Spans are processed from an
/// explicit stack, so native stack depth stays constant; the stack itself
/// holds O(log n) spans because the smaller side is always handled first.
/// Adversarial inputs can still drive the running time to O(n²).
#[derive(Debug, Clone, Copy)]
pub struct RankSorter {
    threshold: usize,
}

impl Default for RankSorter {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_INSERTION_THRESHOLD,
        }
    }
}

impl RankSorter {
    /// Sorter that uses insertion sort on spans shorter than `threshold`.
    ///
    /// `threshold` must be at least [`MIN_PARTITION_LEN`] so that the
    /// partition step never sees a span too short for its sentinels.
    pub fn new(threshold: usize) -> Result<Self, ConfigError> {
        if threshold < MIN_PARTITION_LEN {
            return Err(ConfigError::ThresholdTooSmall {
                threshold,
                minimum: MIN_PARTITION_LEN,
            });
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn sort<T: Counted>(&self, items: &mut [T]) {
        // Half-open spans still to sort.
        let mut pending = vec![(0usize, items.len())];

        while let Some((start, end)) = pending.pop() {
            let span = &mut items[start..end];
            if span.len() < self.threshold {
                insertion_sort(span);
                continue;
            }

            let pivot = start + partition(span);
            trace!("span {start}..{end} split at {pivot}");

            let left = (start, pivot);
            let right = (pivot + 1, end);
            // Pushed last means popped first: keep the smaller side on top.
            if left.1 - left.0 < right.1 - right.0 {
                pending.push(right);
                pending.push(left);
            } else {
                pending.push(left);
                pending.push(right);
            }
        }

        debug_assert!(items.windows(2).all(|w| w[0].count() >= w[1].count()));
    }
}
