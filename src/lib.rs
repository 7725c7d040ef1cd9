//! Prefix-tree word frequency counting with ranked listings.
//!
//! `wordrank-core` stores per-word counts in a character-indexed trie that
//! supports increment, lookup, and decrement with pruning of dead branches,
//! and ranks the stored words with a hybrid quicksort / insertion sort into
//! non-increasing count order. The [`counter`] layer wires the two together
//! with token normalization and stop word filtering. Nothing here performs
//! I/O: callers hand in strings and get values back.

pub mod counter;
pub mod ranking;
pub mod trie;
pub mod types;
