pub mod invariants;
mod node;
mod prune;
pub mod trie;

pub use invariants::InvariantViolation;
pub use node::NodeId;
pub use trie::FrequencyTrie;
