//! Tree row rendering: labels, icon kinds and the indirect-reference badge.

mod formatter;
mod icon;
mod node;

pub use formatter::{NodeFormatter, Rendered};
pub use icon::{IconKind, IconSet};
pub use node::{ArrayEntry, MapEntry, TreeNode};
