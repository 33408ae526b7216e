//! Application state for the TUI.

use std::collections::HashSet;

use crate::config::{Config, TuiConfig};
use crate::editor::{Action, Button, EditorState, Outcome};
use crate::menu::{MenuNode, NodeKey};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing in the input field and navigating the tree.
    Normal,
    /// Confirmation dialog mode.
    Confirm(ConfirmAction),
    /// Help overlay mode.
    Help,
}

/// Action requiring confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete the selected node and its subtree.
    Delete,
}

/// A row of the flattened tree pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNode {
    pub key: NodeKey,
    pub title: String,
    /// Depth in the tree (0 = root category).
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// Main application state for the TUI.
pub struct App {
    /// Menu editor state; all tree edits go through it.
    pub editor: EditorState,

    /// Flattened visible rows (for rendering).
    pub visible_nodes: Vec<VisibleNode>,

    /// Highlighted row in visible_nodes.
    pub cursor: usize,

    /// Nodes the user collapsed. Everything else is expanded.
    pub collapsed: HashSet<NodeKey>,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    /// Display settings.
    pub config: TuiConfig,
}

impl App {
    /// Create a new App instance.
    pub fn new(config: &Config) -> Self {
        Self {
            editor: EditorState::new(config.editor.clone()),
            visible_nodes: Vec::new(),
            cursor: 0,
            collapsed: HashSet::new(),
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            config: config.tui.clone(),
        }
    }

    /// Row under the cursor, if any.
    pub fn cursor_node(&self) -> Option<&VisibleNode> {
        self.visible_nodes.get(self.cursor)
    }

    /// Index of the selected node among the visible rows.
    pub fn selected_row(&self) -> Option<usize> {
        let selected = self.editor.selected()?;
        self.visible_nodes.iter().position(|row| row.key == *selected)
    }

    /// Feed an action to the editor and refresh the view.
    pub fn dispatch(&mut self, action: Action) {
        let (next, outcome) = self.editor.transition(action);
        self.editor = next;

        match outcome {
            Outcome::Unchanged => return,
            Outcome::DraftChanged | Outcome::Selected(_) => {
                self.status_message = None;
            }
            Outcome::Added {
                ref title,
                ref parent,
                ..
            } => {
                self.status_message = Some(match parent {
                    Some(parent) => {
                        // Make sure the new child is visible under its parent
                        self.collapsed.remove(parent);
                        format!("Added subcategory '{}'", title)
                    }
                    None => format!("Added category '{}'", title),
                });
            }
            Outcome::Renamed { ref title, .. } => {
                self.status_message = Some(format!("Renamed to '{}'", title));
            }
            Outcome::Deleted {
                ref title, removed, ..
            } => {
                self.status_message = Some(match removed {
                    1 => format!("Deleted '{}'", title),
                    n => format!("Deleted '{}' and {} nested nodes", title, n - 1),
                });
            }
            Outcome::EditStarted => {
                self.status_message = Some("Type the new name, then [^S] Save Edit".to_string());
            }
        }

        self.rebuild_visible_nodes();
    }

    /// Press a button of the input bar. Hidden buttons do nothing.
    pub fn press(&mut self, button: Button) {
        if !self.editor.shows(button) {
            return;
        }
        if button == Button::DeleteNode && self.config.confirm_delete {
            self.mode = Mode::Confirm(ConfirmAction::Delete);
            return;
        }
        self.dispatch(button.action());
    }

    pub fn type_char(&mut self, c: char) {
        let mut draft = self.editor.draft().to_string();
        draft.push(c);
        self.dispatch(Action::SetDraft(draft));
    }

    pub fn backspace(&mut self) {
        let mut draft = self.editor.draft().to_string();
        if draft.pop().is_some() {
            self.dispatch(Action::SetDraft(draft));
        }
    }

    /// Select the row under the cursor, or deselect it if it already is.
    pub fn toggle_select_cursor(&mut self) {
        let Some(row) = self.cursor_node() else {
            return;
        };
        let keys = if self.editor.selected() == Some(&row.key) {
            vec![]
        } else {
            vec![row.key.clone()]
        };
        self.dispatch(Action::Select(keys));
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(Action::Select(vec![]));
    }

    /// Move the cursor by delta rows, clamped to the visible range.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.visible_nodes.is_empty() {
            return;
        }
        let last = self.visible_nodes.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.visible_nodes.len().saturating_sub(1);
    }

    /// Expand the row under the cursor.
    pub fn expand_cursor(&mut self) {
        let Some(row) = self.cursor_node() else {
            return;
        };
        if row.has_children && !row.is_expanded {
            let key = row.key.clone();
            self.collapsed.remove(&key);
            self.rebuild_visible_nodes();
        }
    }

    /// Collapse the row under the cursor, or jump to its parent row.
    pub fn collapse_cursor(&mut self) {
        let Some(row) = self.cursor_node() else {
            return;
        };
        if row.has_children && row.is_expanded {
            let key = row.key.clone();
            self.collapsed.insert(key);
            self.rebuild_visible_nodes();
        } else if row.depth > 0 {
            let depth = row.depth;
            if let Some(parent) = self.visible_nodes[..self.cursor]
                .iter()
                .rposition(|candidate| candidate.depth == depth - 1)
            {
                self.cursor = parent;
            }
        }
    }

    /// Recompute the flattened rows from the editor's tree.
    pub fn rebuild_visible_nodes(&mut self) {
        let tree = self.editor.tree();
        self.collapsed.retain(|key| tree.contains(key));

        let mut rows = Vec::new();
        for root in tree.roots() {
            flatten(root, 0, &self.collapsed, &mut rows);
        }
        self.visible_nodes = rows;

        if self.cursor >= self.visible_nodes.len() {
            self.cursor = self.visible_nodes.len().saturating_sub(1);
        }
    }
}

fn flatten(
    node: &MenuNode,
    depth: usize,
    collapsed: &HashSet<NodeKey>,
    rows: &mut Vec<VisibleNode>,
) {
    let is_expanded = !collapsed.contains(&node.key);
    rows.push(VisibleNode {
        key: node.key.clone(),
        title: node.title.clone(),
        depth,
        has_children: !node.is_leaf(),
        is_expanded,
    });

    if is_expanded {
        for child in &node.children {
            flatten(child, depth + 1, collapsed, rows);
        }
    }
}
