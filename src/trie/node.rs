/// Stable index of a node inside the trie's slot arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0
    }
}

/// One step of a stored word.
///
/// The root carries no segment; every other node carries exactly one `char`
/// of the token that created it.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) segment: Option<char>,
    pub(crate) count: u64,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn new(segment: Option<char>) -> Self {
        Self {
            segment,
            count: 0,
            children: Vec::new(),
        }
    }
}

/// Slot storage for trie nodes.
///
/// Released slots go on a free list and are reused by later allocations,
/// so ids of live nodes never move.
#[derive(Debug)]
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    live: usize,
}

impl NodeArena {
    /// Arena holding only the root.
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![Some(Node::new(None))],
            free: Vec::new(),
            live: 1,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        match self.slots.get(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {id:?}"),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {id:?}"),
        }
    }

    pub(crate) fn alloc(&mut self, segment: char) -> NodeId {
        self.live += 1;
        let node = Node::new(Some(segment));
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(node);
            return id;
        }
        let id = NodeId(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    /// Free `id` and everything below it. Returns the number of nodes freed.
    pub(crate) fn release_subtree(&mut self, id: NodeId) -> usize {
        debug_assert_ne!(id, NodeId::ROOT, "the root is never released");
        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.slots[next.index()].take() {
                stack.extend(node.children);
                self.free.push(next);
                freed += 1;
            }
        }
        self.live -= freed;
        freed
    }

    /// Number of live nodes, root included.
    pub(crate) fn live(&self) -> usize {
        self.live
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
