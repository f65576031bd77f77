//! Widgets for the object tree view.

pub mod tree;
