use crate::config::EditorConfig;
use crate::menu::{KeyGenerator, MenuNode, MenuTree, NodeKey};

/// An input to the editor: a keystroke in the text field, a button press,
/// or a selection change reported by the tree pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the draft text.
    SetDraft(String),
    /// Append the draft as a new root category.
    AddCategory,
    /// Append the draft as a child of the selected node.
    AddSubcategory,
    /// Enter editing mode for the selected node.
    BeginEdit,
    /// Rename the selected node to the draft and leave editing mode.
    SaveEdit,
    /// Remove the selected node and its subtree.
    DeleteSelected,
    /// Newly selected keys, as reported by the tree pane (zero or one).
    Select(Vec<NodeKey>),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetDraft(_) => "set_draft",
            Action::AddCategory => "add_category",
            Action::AddSubcategory => "add_subcategory",
            Action::BeginEdit => "begin_edit",
            Action::SaveEdit => "save_edit",
            Action::DeleteSelected => "delete_selected",
            Action::Select(_) => "select",
        }
    }
}

/// What a transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Preconditions failed; the state is identical to the input state.
    Unchanged,
    /// Only the draft text changed.
    DraftChanged,
    Added {
        key: NodeKey,
        title: String,
        parent: Option<NodeKey>,
    },
    Renamed {
        key: NodeKey,
        title: String,
    },
    Deleted {
        key: NodeKey,
        title: String,
        /// Nodes removed, counting the deleted node itself
        removed: usize,
    },
    Selected(Option<NodeKey>),
    EditStarted,
}

/// Everything the menu editor knows.
///
/// States are values: [`EditorState::apply`] never modifies `self`, so an
/// older state (and its tree) remains a valid snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    tree: MenuTree,
    selected: Option<NodeKey>,
    draft: String,
    editing: bool,
    keys: KeyGenerator,
    config: EditorConfig,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn selected(&self) -> Option<&NodeKey> {
        self.selected.as_ref()
    }

    pub fn selected_node(&self) -> Option<&MenuNode> {
        self.selected.as_ref().and_then(|key| self.tree.find(key))
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Nodes created during the session, including deleted ones.
    pub fn nodes_created(&self) -> u64 {
        self.keys.issued()
    }

    /// Apply `action`, returning the next state.
    pub fn apply(&self, action: Action) -> EditorState {
        self.transition(action).0
    }

    /// Apply `action`, returning the next state and what changed.
    pub fn transition(&self, action: Action) -> (EditorState, Outcome) {
        let name = action.name();
        let mut next = self.clone();
        let outcome = next.reduce(action);

        if outcome == Outcome::Unchanged {
            tracing::trace!(action = name, "Editor action was a no-op");
        } else {
            tracing::debug!(action = name, ?outcome, "Applied editor action");
        }

        (next, outcome)
    }

    /// Mutates the (already cloned) state. Every no-op path returns before
    /// touching any field.
    fn reduce(&mut self, action: Action) -> Outcome {
        match action {
            Action::SetDraft(text) => {
                if text == self.draft {
                    return Outcome::Unchanged;
                }
                self.draft = text;
                Outcome::DraftChanged
            }

            Action::AddCategory => {
                if self.draft.is_empty() || self.selected.is_some() {
                    return Outcome::Unchanged;
                }
                let key = self.keys.next_key();
                let title = std::mem::take(&mut self.draft);
                self.tree = self.tree.with_root(MenuNode::new(key.clone(), title.clone()));
                Outcome::Added {
                    key,
                    title,
                    parent: None,
                }
            }

            Action::AddSubcategory => {
                if self.draft.is_empty() {
                    return Outcome::Unchanged;
                }
                let Some(parent) = self.selected.clone() else {
                    return Outcome::Unchanged;
                };
                let key = self.keys.next_key();
                let title = std::mem::take(&mut self.draft);
                match self
                    .tree
                    .with_child(&parent, MenuNode::new(key.clone(), title.clone()))
                {
                    Some(tree) => {
                        self.tree = tree;
                        Outcome::Added {
                            key,
                            title,
                            parent: Some(parent),
                        }
                    }
                    None => Outcome::DraftChanged,
                }
            }

            Action::BeginEdit => {
                if self.editing {
                    return Outcome::Unchanged;
                }
                let Some(key) = self.selected.as_ref() else {
                    return Outcome::Unchanged;
                };
                if self.config.prefill_edit_draft {
                    if let Some(node) = self.tree.find(key) {
                        self.draft = node.title.clone();
                    }
                }
                self.editing = true;
                Outcome::EditStarted
            }

            Action::SaveEdit => {
                if !self.editing || self.draft.is_empty() {
                    return Outcome::Unchanged;
                }
                let Some(key) = self.selected.clone() else {
                    return Outcome::Unchanged;
                };
                let title = std::mem::take(&mut self.draft);
                self.editing = false;
                match self.tree.with_title(&key, &title) {
                    Some(tree) => {
                        self.tree = tree;
                        Outcome::Renamed { key, title }
                    }
                    None => Outcome::DraftChanged,
                }
            }

            Action::DeleteSelected => {
                let Some(key) = self.selected.take() else {
                    return Outcome::Unchanged;
                };
                self.editing = false;
                let removed = self
                    .tree
                    .find(&key)
                    .map(|node| (node.title.clone(), node.subtree_len()));
                match (self.tree.without(&key), removed) {
                    (Some(tree), Some((title, removed))) => {
                        self.tree = tree;
                        Outcome::Deleted {
                            key,
                            title,
                            removed,
                        }
                    }
                    _ => Outcome::Selected(None),
                }
            }

            Action::Select(keys) => {
                let selected = keys
                    .into_iter()
                    .next()
                    .filter(|key| self.tree.contains(key));
                if selected == self.selected && !self.editing {
                    return Outcome::Unchanged;
                }
                self.selected = selected.clone();
                self.editing = false;
                Outcome::Selected(selected)
            }
        }
    }
}
