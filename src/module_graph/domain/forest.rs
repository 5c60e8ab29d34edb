use super::coordinate::MavenCoordinate;
use super::node::ModuleNode;
use std::collections::HashSet;

/// Stable arena index of a node within a [`ModuleForest`].
pub type NodeId = usize;

/// ModuleForest aggregate - an arena of module nodes plus the current set of
/// tree roots.
///
/// All searches and ancestor walks are iterative over the arena, so deep
/// module hierarchies cannot overflow the stack. Invariants: identities are
/// unique among live nodes, trees are disjoint (every node has at most one
/// parent) and parent chains are finite.
#[derive(Debug, Default)]
pub struct ModuleForest {
    nodes: Vec<Option<ModuleNode>>,
    roots: Vec<NodeId>,
}

impl ModuleForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the arena without attaching it anywhere.
    pub fn alloc(&mut self, node: ModuleNode) -> NodeId {
        self.nodes.push(Some(node));
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> Option<&ModuleNode> {
        self.nodes.get(id).and_then(|slot| slot.as_ref())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut ModuleNode> {
        self.nodes.get_mut(id).and_then(|slot| slot.as_mut())
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.node_mut(parent) {
            node.push_child(child);
        }
    }

    /// Searches every tree at every depth for a node with the given identity.
    ///
    /// A module may already exist as a placeholder nested anywhere in the
    /// forest, so searching only the roots is not enough.
    pub fn find_by_identity(&self, identity: &MavenCoordinate) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            if node.identity() == identity {
                return Some(id);
            }
            stack.extend(node.children().iter().rev().copied());
        }
        None
    }

    /// Detaches a node from wherever it currently sits - the root list or a
    /// parent's child list. The node stays live in the arena so it can be
    /// reinserted under a different parent.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(idx) = self.roots.iter().position(|&r| r == id) {
            self.roots.remove(idx);
            return;
        }
        for slot in self.nodes.iter_mut() {
            if let Some(node) = slot.as_mut() {
                if node.remove_child(id) {
                    return;
                }
            }
        }
    }

    /// Resolves the parent of a node through its recorded parent identity.
    ///
    /// Returns `None` for roots, for parents not present in the forest, and
    /// for the degenerate self-parent case.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        let parent_identity = self.node(id)?.parent_identity().clone();
        if parent_identity.is_empty() {
            return None;
        }
        match self.find_by_identity(&parent_identity) {
            Some(parent_id) if parent_id != id => Some(parent_id),
            _ => None,
        }
    }

    /// Removes every root that was never matched to a real descriptor and
    /// promotes its children to roots in its place, repeating until no such
    /// root remains. Guarantees that every surviving node corresponds to a
    /// descriptor that actually exists in the scanned workspace.
    pub fn prune_rootless_roots(&mut self) {
        loop {
            let Some(idx) = self
                .roots
                .iter()
                .position(|&id| self.node(id).is_some_and(|n| n.is_placeholder()))
            else {
                return;
            };
            let id = self.roots.remove(idx);
            let children = match self.nodes.get_mut(id).and_then(|slot| slot.as_mut()) {
                Some(node) => node.take_children(),
                None => Vec::new(),
            };
            for (offset, child) in children.into_iter().enumerate() {
                self.roots.insert(idx + offset, child);
            }
            self.nodes[id] = None;
        }
    }

    /// All live nodes in depth-first order, each tree in turn.
    pub fn iter_depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                order.push(id);
                stack.extend(node.children().iter().rev().copied());
            }
        }
        order
    }

    /// Number of nodes reachable from the roots.
    pub fn node_count(&self) -> usize {
        self.iter_depth_first().len()
    }

    /// Checks structural validity: every reachable node is visited exactly
    /// once (disjoint trees, no cycles) and no non-empty identity appears
    /// twice.
    pub fn is_valid(&self) -> bool {
        let mut seen_nodes = HashSet::new();
        let mut seen_identities = HashSet::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if !seen_nodes.insert(id) {
                return false;
            }
            let Some(node) = self.node(id) else {
                return false;
            };
            if !node.identity().is_empty() && !seen_identities.insert(node.identity().normalized())
            {
                return false;
            }
            stack.extend(node.children().iter().rev().copied());
        }
        true
    }
}
