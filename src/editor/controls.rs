use super::{Action, EditorState};

/// A button of the editor's input bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    AddCategory,
    AddSubcategory,
    EditNode,
    DeleteNode,
    SaveEdit,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::AddCategory => "Add Category",
            Button::AddSubcategory => "Add Subcategory",
            Button::EditNode => "Edit Node",
            Button::DeleteNode => "Delete Node",
            Button::SaveEdit => "Save Edit",
        }
    }

    /// The editor action a press of this button triggers.
    pub fn action(self) -> Action {
        match self {
            Button::AddCategory => Action::AddCategory,
            Button::AddSubcategory => Action::AddSubcategory,
            Button::EditNode => Action::BeginEdit,
            Button::DeleteNode => Action::DeleteSelected,
            Button::SaveEdit => Action::SaveEdit,
        }
    }
}

impl EditorState {
    /// Buttons shown for the current selection and edit mode.
    pub fn buttons(&self) -> &'static [Button] {
        if self.is_editing() {
            &[Button::SaveEdit]
        } else if self.selected().is_some() {
            &[Button::AddSubcategory, Button::EditNode, Button::DeleteNode]
        } else {
            &[Button::AddCategory]
        }
    }

    pub fn shows(&self, button: Button) -> bool {
        self.buttons().contains(&button)
    }
}
