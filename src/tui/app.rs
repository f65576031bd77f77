//! Application state for the TUI.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::cos::Document;
use super::widgets::tree::Palette;
use crate::tree::{flatten, NodePath, TreeRow};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Help overlay mode.
    Help,
}

/// Main application state for the TUI.
pub struct App {
    /// File the document was loaded from.
    pub source: PathBuf,

    /// The document being explored.
    pub document: Document,

    /// Flattened visible rows (for rendering).
    pub rows: Vec<TreeRow>,

    /// Currently selected index in rows.
    pub selected: usize,

    /// Paths of expanded nodes.
    pub expanded: HashSet<NodePath>,

    /// Current UI mode.
    pub mode: Mode,

    /// Colors used to draw the tree.
    pub palette: Palette,

    /// Draw icon tags in front of labels.
    pub show_icons: bool,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance showing the collapsed trailer.
    pub fn new(source: PathBuf, document: Document) -> Self {
        let mut app = Self {
            source,
            document,
            rows: Vec::new(),
            selected: 0,
            expanded: HashSet::new(),
            mode: Mode::Normal,
            palette: Palette::Dark,
            show_icons: true,
            should_quit: false,
            status_message: None,
        };
        app.rebuild_rows();
        app
    }

    /// Expand the trailer so its entries are visible.
    pub fn expand_root(&mut self) {
        self.expanded.insert(Vec::new());
        self.rebuild_rows();
    }

    /// Get the currently selected row, if any.
    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected)
    }

    /// Recompute visible rows from the expanded set.
    pub fn rebuild_rows(&mut self) {
        let expanded = &self.expanded;
        self.rows = flatten(&self.document, |path, _| expanded.contains(path));
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    /// Move the selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, last as isize) as usize;
        self.status_message = None;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Expand the selected node.
    pub fn expand_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.has_children && !row.is_expanded {
            let path = row.path.clone();
            self.expanded.insert(path);
            self.rebuild_rows();
        }
    }

    /// Collapse the selected node, or jump to its parent when it is
    /// already collapsed.
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };

        if row.is_expanded {
            let path = row.path.clone();
            self.expanded.remove(&path);
            self.rebuild_rows();
        } else if let Some((_, parent)) = row.path.split_last() {
            let parent = parent.to_vec();
            if let Some(index) = self.rows.iter().position(|r| r.path == parent) {
                self.selected = index;
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        match self.selected_row().map(|row| row.is_expanded) {
            Some(true) => self.collapse_selected(),
            Some(false) => self.expand_selected(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cos::{CosValue, Dictionary};

    fn document() -> Document {
        Document::new(
            Dictionary::new()
                .with("Size", CosValue::Integer(2))
                .with("Root", CosValue::reference(1, 0)),
        )
        .with_object(
            1,
            0,
            CosValue::Dictionary(Dictionary::new().with("Type", CosValue::name("Catalog"))),
        )
    }

    #[test]
    fn test_app_new() {
        let app = App::new(PathBuf::from("doc.json"), document());
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.selected, 0);
        assert!(!app.should_quit);
        assert_eq!(app.rows.len(), 1);
        assert!(app.expanded.is_empty());
    }

    #[test]
    fn test_expand_root() {
        let mut app = App::new(PathBuf::from("doc.json"), document());
        app.expand_root();
        assert_eq!(app.rows.len(), 3);
        assert!(app.rows[0].is_expanded);
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut app = App::new(PathBuf::from("doc.json"), document());
        app.expand_root();
        app.move_selection(10);
        assert_eq!(app.selected, 2);
        app.move_selection(-10);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_collapse_jumps_to_parent() {
        let mut app = App::new(PathBuf::from("doc.json"), document());
        app.expand_root();
        app.selected = 2;
        app.expand_selected();
        assert_eq!(app.rows.len(), 4);

        app.selected = 3;
        app.collapse_selected();
        assert_eq!(app.selected, 2);

        app.collapse_selected();
        assert_eq!(app.rows.len(), 3);
    }

    #[test]
    fn test_scalar_cannot_expand() {
        let mut app = App::new(PathBuf::from("doc.json"), document());
        app.expand_root();
        app.selected = 1;
        app.expand_selected();
        assert_eq!(app.rows.len(), 3);
    }
}
