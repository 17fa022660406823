//! DOM queries: by id and class; predicate matching in arena or
//! document order.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Find the first element whose `id` matches.
    ///
    /// Iterates all elements in the arena (not just the tree rooted at `root`).
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all elements that have the given CSS class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// Find all elements matching an arbitrary predicate, in arena order.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all elements matching `predicate` in the subtree of `scope`,
    /// `scope` itself included, in document order.
    pub fn query_within(&self, scope: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_depth_first(scope)
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(&predicate))
            .collect()
    }

    /// First match of [`Dom::query_within`].
    pub fn query_first_within(
        &self,
        scope: NodeId,
        predicate: impl Fn(&NodeData) -> bool,
    ) -> Option<NodeId> {
        self.query_within(scope, predicate).into_iter().next()
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in slotmap order, which is
    /// deterministic but not tree order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}
