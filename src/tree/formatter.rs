use std::path::PathBuf;

use serde::Serialize;

use super::walker::{flatten, NodePath, TreeRow};
use crate::cos::Document;
use crate::render::{IconKind, IconSet, Rendered};

/// Format options for tree output
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Maximum depth to expand
    pub max_depth: Option<usize>,
    /// Prefix rows with their icon tag
    pub show_icons: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(3),
            show_icons: true,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_icons(mut self, enabled: bool) -> Self {
        self.show_icons = enabled;
        self
    }

    pub fn unlimited() -> Self {
        Self {
            max_depth: None,
            show_icons: true,
        }
    }

    fn expands(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}

/// Text stand-in for an icon and its overlay, e.g. `[int+ref]`.
///
/// Empty when there is nothing to draw.
pub fn icon_tag(rendered: &Rendered) -> String {
    let base = rendered.icon.tag();
    match rendered.overlay {
        Some(overlay) => format!("[{}+{}]", base, overlay.tag()),
        None if rendered.icon == IconKind::None => String::new(),
        None => format!("[{}]", base),
    }
}

/// Rows visible with every node expanded up to the depth limit.
pub fn visible_rows(doc: &Document, options: &FormatOptions) -> Vec<TreeRow> {
    flatten(doc, |_, depth| options.expands(depth))
}

/// Format the document as a tree string
pub fn format_tree(doc: &Document, options: &FormatOptions) -> String {
    let mut output = String::new();
    // is_last flag of each open ancestor, by depth
    let mut last_flags: Vec<bool> = Vec::new();

    for row in visible_rows(doc, options) {
        last_flags.truncate(row.depth);

        let mut line = String::new();
        for &ancestor_last in last_flags.iter().skip(1) {
            line.push_str(if ancestor_last { "    " } else { "│   " });
        }
        if row.depth > 0 {
            line.push_str(if row.is_last { "└── " } else { "├── " });
        }

        if options.show_icons {
            let tag = icon_tag(&row.rendered);
            if !tag.is_empty() {
                line.push_str(&tag);
                line.push(' ');
            }
        }
        line.push_str(&row.rendered.label);

        output.push_str(line.trim_end());
        output.push('\n');

        last_flags.push(row.is_last);
    }

    output
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    depth: usize,
    path: &'a NodePath,
    label: &'a str,
    icon: IconKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<IconKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_path: Option<PathBuf>,
}

/// Format the visible rows as JSON
pub fn format_json(
    doc: &Document,
    options: &FormatOptions,
    icons: Option<&IconSet>,
) -> Result<String, serde_json::Error> {
    let rows = visible_rows(doc, options);
    let json_rows: Vec<JsonRow<'_>> = rows
        .iter()
        .map(|row| JsonRow {
            depth: row.depth,
            path: &row.path,
            label: &row.rendered.label,
            icon: row.rendered.icon,
            overlay: row.rendered.overlay,
            icon_path: icons.and_then(|set| set.image_path(row.rendered.icon)),
        })
        .collect();

    serde_json::to_string_pretty(&json_rows)
}
