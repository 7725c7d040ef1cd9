use log::debug;

use crate::types::RankEntry;

use super::node::{NodeArena, NodeId};
use super::prune::prune_path;

/// Character-indexed prefix tree holding a count per stored word.
///
/// Each non-root node carries one `char`; a word's count lives on the node
/// reached by walking all of its characters from the root. Tokens are
/// compared exactly: no case folding or other normalization happens here.
///
/// Not synchronized. Mutation needs `&mut self`, so sharing across threads
/// requires an outer lock.
#[derive(Debug, Default)]
pub struct FrequencyTrie {
    arena: NodeArena,
}

impl FrequencyTrie {
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
        }
    }

    /// Add one occurrence of `token`, creating nodes for any unseen suffix.
    ///
    /// The empty token is ignored.
    pub fn increment(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }

        let mut current = NodeId::ROOT;
        let mut rest = token.chars();
        while let Some(ch) = rest.next() {
            match self.child(current, ch) {
                Some(next) => current = next,
                None => {
                    // Everything from `ch` on is new: splice in a fresh chain.
                    current = self.attach(current, ch);
                    for tail in rest.by_ref() {
                        current = self.attach(current, tail);
                    }
                }
            }
        }

        self.arena.get_mut(current).count += 1;
    }

    /// Remove one occurrence of `token`.
    ///
    /// No-op unless `token` is present with a count above zero. When the
    /// count reaches zero, nodes that no longer lead to any stored word are
    /// pruned bottom-up; the root always stays.
    pub fn decrement(&mut self, token: &str) {
        if !self.contains(token) {
            return;
        }
        let Some(path) = self.path_to(token) else {
            return;
        };
        let Some(&terminal) = path.last() else {
            return;
        };

        let node = self.arena.get_mut(terminal);
        node.count -= 1;
        if node.count == 0 {
            let released = prune_path(&mut self.arena, &path);
            if released > 0 {
                debug!("pruned {released} node(s) after removing {token:?}");
            }
        }
    }

    /// Whether `token` is stored with a count above zero.
    pub fn contains(&self, token: &str) -> bool {
        matches!(self.get_count(token), Some(count) if count > 0)
    }

    /// Count stored for `token`, or `None` if its path does not exist.
    ///
    /// The empty token walks zero steps and reads the root's own count,
    /// which is `Some(0)` because [`increment`](Self::increment) never
    /// counts the empty token. Absence is only ever reported for non-empty
    /// tokens.
    pub fn get_count(&self, token: &str) -> Option<u64> {
        let path = self.path_to(token)?;
        path.last().map(|id| self.arena.get(*id).count)
    }

    /// Every stored word with its count, in pre-order.
    ///
    /// A node's own word comes before its descendants; siblings appear in
    /// the order they were first inserted. Interior nodes with a zero count
    /// are skipped, but leaves are always emitted, so an empty trie yields a
    /// single `("", 0)` entry for the root. Callers that want only real
    /// words should keep entries with `count > 0`.
    pub fn enumerate(&self) -> Vec<RankEntry> {
        let mut entries = Vec::new();
        let mut prefix: Vec<char> = Vec::new();
        let mut stack = vec![(NodeId::ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = self.arena.get(id);
            prefix.truncate(depth);
            if let Some(segment) = node.segment {
                prefix.push(segment);
            }

            if node.count > 0 || node.children.is_empty() {
                entries.push(RankEntry::new(prefix.iter().collect::<String>(), node.count));
            }

            let child_depth = prefix.len();
            stack.extend(node.children.iter().rev().map(|child| (*child, child_depth)));
        }

        entries
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    pub(crate) fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Root-to-terminal node ids for `token`, root first.
    fn path_to(&self, token: &str) -> Option<Vec<NodeId>> {
        let mut path = vec![NodeId::ROOT];
        let mut current = NodeId::ROOT;
        for ch in token.chars() {
            current = self.child(current, ch)?;
            path.push(current);
        }
        Some(path)
    }

    fn child(&self, parent: NodeId, segment: char) -> Option<NodeId> {
        self.arena
            .get(parent)
            .children
            .iter()
            .copied()
            .find(|child| self.arena.get(*child).segment == Some(segment))
    }

    fn attach(&mut self, parent: NodeId, segment: char) -> NodeId {
        debug_assert!(
            self.child(parent, segment).is_none(),
            "sibling segment {segment:?} already present"
        );
        let id = self.arena.alloc(segment);
        self.arena.get_mut(parent).children.push(id);
        id
    }
}
