use std::sync::Arc;

use super::NodeKey;

/// A single entry of the menu tree.
///
/// Children sit behind `Arc` so that a new tree snapshot can share every
/// subtree an edit did not touch with the snapshot it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Unique key of this node
    pub key: NodeKey,

    /// Display label
    pub title: String,

    /// Ordered child nodes (empty for leaves, never absent)
    pub children: Vec<Arc<MenuNode>>,
}

impl MenuNode {
    /// Create a node with no children.
    pub fn new(key: NodeKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper for constructing fixtures.
    pub fn with_child(mut self, child: MenuNode) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.subtree_len())
            .sum::<usize>()
    }
}
