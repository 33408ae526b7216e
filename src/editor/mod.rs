//! Menu editing state and its transitions.
//!
//! Nothing in here knows about terminals. The TUI feeds [`Action`]s into
//! [`EditorState::transition`] and renders whatever comes back.

mod controls;
mod state;

pub use controls::Button;
pub use state::{Action, EditorState, Outcome};
