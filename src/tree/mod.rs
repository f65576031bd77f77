//! Walking the object graph into tree rows, and text/JSON output.

mod formatter;
mod walker;

pub use formatter::{format_json, format_tree, icon_tag, visible_rows, FormatOptions};
pub use walker::{child_count, children, flatten, node_at, root, NodePath, TreeRow};
