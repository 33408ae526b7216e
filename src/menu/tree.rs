use std::sync::Arc;

use super::{MenuNode, NodeKey};

/// An ordered forest of menu nodes.
///
/// Every edit returns a new tree. Only the nodes on the path from a root to
/// the edited node are rebuilt; all other subtrees are shared with the
/// previous snapshot, which stays valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    roots: Vec<Arc<MenuNode>>,
}

/// What to do with the node whose key matched during a rebuild.
enum Edit {
    Replace(MenuNode),
    Remove,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from ready-made root nodes.
    pub fn from_roots(roots: impl IntoIterator<Item = MenuNode>) -> Self {
        Self {
            roots: roots.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn roots(&self) -> &[Arc<MenuNode>] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.roots.iter().map(|root| root.subtree_len()).sum()
    }

    /// Pre-order walk over every node, yielding `(depth, node)`.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst::new(&self.roots)
    }

    pub fn find(&self, key: &NodeKey) -> Option<&MenuNode> {
        self.iter().map(|(_, node)| node).find(|node| node.key == *key)
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.find(key).is_some()
    }

    /// Append a new root after the existing ones.
    pub fn with_root(&self, node: MenuNode) -> MenuTree {
        let mut roots = self.roots.clone();
        roots.push(Arc::new(node));
        MenuTree { roots }
    }

    /// Append `node` to the children of the node keyed `parent`.
    ///
    /// Returns `None` when no node has that key.
    pub fn with_child(&self, parent: &NodeKey, node: MenuNode) -> Option<MenuTree> {
        let node = Arc::new(node);
        self.rebuild(parent, &|target| {
            let mut updated = target.clone();
            updated.children.push(Arc::clone(&node));
            Edit::Replace(updated)
        })
    }

    /// Replace the title of the node keyed `key`, keeping its children.
    ///
    /// Returns `None` when no node has that key.
    pub fn with_title(&self, key: &NodeKey, title: &str) -> Option<MenuTree> {
        self.rebuild(key, &|target| {
            Edit::Replace(MenuNode {
                key: target.key.clone(),
                title: title.to_string(),
                children: target.children.clone(),
            })
        })
    }

    /// Remove the node keyed `key` along with its whole subtree.
    ///
    /// Returns `None` when no node has that key.
    pub fn without(&self, key: &NodeKey) -> Option<MenuTree> {
        self.rebuild(key, &|_| Edit::Remove)
    }

    fn rebuild(&self, key: &NodeKey, edit: &dyn Fn(&MenuNode) -> Edit) -> Option<MenuTree> {
        rebuild_level(&self.roots, key, edit).map(|roots| MenuTree { roots })
    }
}

/// Depth-first search over one sibling level.
///
/// On a match the level is copied with the matching slot replaced (or
/// dropped); untouched siblings are the same `Arc`s as before.
fn rebuild_level(
    nodes: &[Arc<MenuNode>],
    key: &NodeKey,
    edit: &dyn Fn(&MenuNode) -> Edit,
) -> Option<Vec<Arc<MenuNode>>> {
    for (index, node) in nodes.iter().enumerate() {
        let replacement = if node.key == *key {
            match edit(node) {
                Edit::Replace(updated) => Some(Arc::new(updated)),
                Edit::Remove => None,
            }
        } else if let Some(children) = rebuild_level(&node.children, key, edit) {
            Some(Arc::new(MenuNode {
                key: node.key.clone(),
                title: node.title.clone(),
                children,
            }))
        } else {
            continue;
        };

        let mut level = Vec::with_capacity(nodes.len());
        level.extend(nodes[..index].iter().cloned());
        level.extend(replacement);
        level.extend(nodes[index + 1..].iter().cloned());
        return Some(level);
    }

    None
}

/// Pre-order iterator returned by [`MenuTree::iter`].
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a MenuNode)>,
}

impl<'a> DepthFirst<'a> {
    fn new(roots: &'a [Arc<MenuNode>]) -> Self {
        let stack = roots.iter().rev().map(|node| (0, node.as_ref())).collect();
        Self { stack }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a MenuNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child.as_ref())));
        Some((depth, node))
    }
}
