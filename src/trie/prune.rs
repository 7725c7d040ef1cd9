use super::node::{NodeArena, NodeId};

/// A node is useful when it, or anything below it, still terminates a word.
pub(crate) fn is_useful(arena: &NodeArena, id: NodeId) -> bool {
    let mut stack = vec![id];
    while let Some(next) = stack.pop() {
        let node = arena.get(next);
        if node.count > 0 {
            return true;
        }
        stack.extend(node.children.iter().copied());
    }
    false
}

/// Bottom-up pass over a root-to-terminal `path`, detaching every node that
/// is no longer useful. Stops at the first useful node; the root (`path[0]`)
/// is never detached.
///
/// Returns the number of nodes released.
pub(crate) fn prune_path(arena: &mut NodeArena, path: &[NodeId]) -> usize {
    let mut released = 0;
    for depth in (1..path.len()).rev() {
        let id = path[depth];
        if is_useful(arena, id) {
            break;
        }
        let parent = path[depth - 1];
        arena.get_mut(parent).children.retain(|child| *child != id);
        released += arena.release_subtree(id);
    }
    released
}
