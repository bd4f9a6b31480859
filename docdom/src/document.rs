use log::debug;

use crate::node::Node;

/// Handle into a [`Document`]'s node arena.
///
/// Ids stay valid for the lifetime of the document; nodes are never
/// removed, only detached from rendering via
/// [`Display::None`](crate::Display::None).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A retained, mutable node tree.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. All
/// structural operations (append, sibling insertion) and queries go
/// through the document; per-node state is edited through
/// [`node_mut`](Document::node_mut).
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element. It joins the tree through
    /// [`append_child`](Document::append_child) or
    /// [`insert_after`](Document::insert_after).
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `child` is already attached somewhere in the tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.nodes[child.0].parent.is_none(),
            "append_child: node {} is already attached",
            self.nodes[child.0].id
        );
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `node` as the next sibling of `reference`, preserving
    /// `reference`'s place in document flow.
    ///
    /// # Panics
    ///
    /// Panics if `reference` is detached or `node` is already attached.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) {
        assert!(
            self.nodes[node.0].parent.is_none(),
            "insert_after: node {} is already attached",
            self.nodes[node.0].id
        );
        let Some(parent) = self.nodes[reference.0].parent else {
            panic!(
                "insert_after: reference node {} is detached",
                self.nodes[reference.0].id
            );
        };

        let siblings = &mut self.nodes[parent.0].children;
        match siblings.iter().position(|&c| c == reference) {
            Some(i) => siblings.insert(i + 1, node),
            None => siblings.push(node),
        }
        self.nodes[node.0].parent = Some(parent);
        debug!(
            "insert_after: {} after {}",
            self.nodes[node.0].id, self.nodes[reference.0].id
        );
    }

    // -------------------------------------------------------------------------
    // Queries (descendants of `start`, document order, `start` excluded)
    // -------------------------------------------------------------------------

    /// All descendants of `start` in document (preorder) order.
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[start.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        out
    }

    /// First descendant carrying the class.
    pub fn find_by_class(&self, start: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(start)
            .into_iter()
            .find(|&id| self.nodes[id.0].has_class(class))
    }

    /// First descendant whose attribute `name` equals `value`.
    pub fn find_by_attr(&self, start: NodeId, name: &str, value: &str) -> Option<NodeId> {
        self.descendants(start)
            .into_iter()
            .find(|&id| self.nodes[id.0].attr(name).is_some_and(|v| v == value))
    }

    /// All descendants carrying the attribute, document order.
    pub fn query_by_attr(&self, start: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(start)
            .into_iter()
            .filter(|&id| self.nodes[id.0].has_attr(name))
            .collect()
    }

    /// All descendants with the given tag, document order.
    pub fn query_by_tag(&self, start: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(start)
            .into_iter()
            .filter(|&id| self.nodes[id.0].tag == tag)
            .collect()
    }
}
