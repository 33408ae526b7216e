//! Menu Builder - A terminal editor for hierarchical menus
//!
//! This crate provides functionality for:
//! - Building menu trees out of categories and subcategories
//! - Editing them through pure, snapshot-preserving state transitions
//! - Interactive TUI for the editing session

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod menu;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use editor::{Action, EditorState};
pub use error::{MenuError, Result};
pub use menu::{MenuNode, MenuTree, NodeKey};
