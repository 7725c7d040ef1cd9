use std::collections::HashSet;

use thiserror::Error;

use super::node::NodeId;
use super::prune::is_useful;
use super::trie::FrequencyTrie;

/// A structural defect found by [`FrequencyTrie::check_invariants`].
///
/// Any of these means the trie itself is buggy; none is reachable through
/// the public mutation API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Sibling segment {0:?} appears more than once under the same parent")]
    DuplicateSibling(char),
    #[error("Node for prefix {0:?} neither counts a word nor leads to one")]
    UselessNode(String),
    #[error("Root counts the empty word {0} time(s)")]
    CountedRoot(u64),
    #[error("Node {0:?} is reachable more than once")]
    SharedNode(NodeId),
    #[error("Non-root node is missing its segment")]
    MissingSegment,
    #[error("Arena reports {live} live node(s) but {reachable} are reachable")]
    NodeCountMismatch { live: usize, reachable: usize },
}

impl FrequencyTrie {
    /// Walk the whole tree and verify its structural invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let arena = self.arena();

        let root = arena.get(NodeId::ROOT);
        if root.count != 0 {
            return Err(InvariantViolation::CountedRoot(root.count));
        }

        let mut seen = HashSet::new();
        let mut stack = vec![(NodeId::ROOT, String::new())];
        while let Some((id, prefix)) = stack.pop() {
            if !seen.insert(id) {
                return Err(InvariantViolation::SharedNode(id));
            }
            let node = arena.get(id);

            if id != NodeId::ROOT && !is_useful(arena, id) {
                return Err(InvariantViolation::UselessNode(prefix));
            }

            let mut segments = HashSet::new();
            for child in &node.children {
                let segment = arena
                    .get(*child)
                    .segment
                    .ok_or(InvariantViolation::MissingSegment)?;
                if !segments.insert(segment) {
                    return Err(InvariantViolation::DuplicateSibling(segment));
                }
                let mut child_prefix = prefix.clone();
                child_prefix.push(segment);
                stack.push((*child, child_prefix));
            }
        }

        if seen.len() != arena.live() {
            return Err(InvariantViolation::NodeCountMismatch {
                live: arena.live(),
                reachable: seen.len(),
            });
        }
        Ok(())
    }
}
