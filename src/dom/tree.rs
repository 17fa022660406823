//! Document tree: element arena plus the page state components touch
//! (focus, session storage, location hash).

use std::collections::{HashMap, VecDeque};

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

const EMPTY_CHILDREN: &[NodeId] = &[];

/// The document, backed by a slotmap arena.
///
/// All elements live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps so that removal is O(subtree size) and lookup is
/// O(1).
#[derive(Debug)]
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
    focused: Option<NodeId>,
    session: HashMap<String, String>,
    location_hash: Option<String>,
}

impl Dom {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            focused: None,
            session: HashMap::new(),
            location_hash: None,
        }
    }

    /// Insert a parentless element. The first one inserted becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert an element as the last child of `parent`.
    ///
    /// If `parent` does not exist the element is inserted detached.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
            self.parent.insert(id, parent);
        }
        id
    }

    /// Remove an element and all its descendants.
    ///
    /// Returns the `NodeData` for the removed element, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            if self.focused == Some(current) {
                self.focused = None;
            }
            let data = self.nodes.remove(current);
            if current == id {
                removed = data;
            }
        }

        removed
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children of an element; empty if it has none or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors from the immediate parent up to the root, excluding `id`.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent(current) {
            result.push(p);
            current = p;
        }
        result
    }

    /// Value of `name` on `id` or its closest ancestor that has it.
    ///
    /// Used for inherited attributes such as `lang`.
    pub fn closest_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|node| self.get(node).and_then(|data| data.attribute(name)))
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Move focus to `id`. Ignored for elements not in the document.
    pub fn focus(&mut self, id: NodeId) {
        if self.contains(id) {
            self.focused = Some(id);
        }
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Per-page key/value storage that outlives component instances.
    pub fn session_storage(&self) -> &HashMap<String, String> {
        &self.session
    }

    pub fn session_storage_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.session
    }

    /// Fragment of the page URL, without the leading `#`.
    pub fn location_hash(&self) -> Option<&str> {
        self.location_hash.as_deref()
    }

    /// Set the URL fragment. A leading `#` is stripped.
    pub fn set_location_hash(&mut self, hash: impl Into<String>) {
        let hash = hash.into();
        let hash = hash.strip_prefix('#').map(str::to_owned).unwrap_or(hash);
        self.location_hash = Some(hash);
    }

    /// Pre-order depth-first traversal (document order) from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
