//! COS Explorer - an object tree explorer for PDF-style documents
//!
//! This crate provides functionality for:
//! - Classifying object tree nodes into labels and icons
//! - Walking a document's object graph into tree rows
//! - Printing the tree and exploring it in an interactive TUI

pub mod cli;
pub mod commands;
pub mod config;
pub mod cos;
pub mod error;
pub mod render;
pub mod tree;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{ExplorerError, Result};
pub use render::{IconKind, NodeFormatter, Rendered, TreeNode};
