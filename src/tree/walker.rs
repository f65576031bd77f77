use serde::Serialize;

use crate::cos::{CosValue, Dictionary, Document, ObjectRef};
use crate::render::{ArrayEntry, MapEntry, NodeFormatter, Rendered, TreeNode};

/// Child indices from the root to a node.
pub type NodePath = Vec<usize>;

/// A visible row of the flattened object tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeRow {
    pub path: NodePath,
    /// Depth in the tree (0 = trailer).
    pub depth: usize,
    /// Whether the node can be expanded.
    pub has_children: bool,
    pub is_expanded: bool,
    /// Last child of its parent.
    pub is_last: bool,
    /// Reference the node is stored through, if any.
    pub reference: Option<ObjectRef>,
    pub rendered: Rendered,
}

/// The root node: the trailer dictionary.
pub fn root(doc: &Document) -> TreeNode<'_> {
    TreeNode::Value(doc.trailer())
}

/// Child nodes of `value` in document order.
///
/// Dictionaries yield one entry per key, arrays one per element and streams
/// the entries of their dictionary.
pub fn children<'a>(doc: &'a Document, value: &'a CosValue) -> Vec<TreeNode<'a>> {
    match value {
        CosValue::Dictionary(dict) => dict_children(doc, dict),
        CosValue::Stream(stream) => dict_children(doc, &stream.dict),
        CosValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| ArrayEntry::resolve(index, item, doc).into())
            .collect(),
        _ => Vec::new(),
    }
}

fn dict_children<'a>(doc: &'a Document, dict: &'a Dictionary) -> Vec<TreeNode<'a>> {
    dict.iter()
        .map(|(key, item)| MapEntry::resolve(key, item, doc).into())
        .collect()
}

pub fn child_count(value: &CosValue) -> usize {
    match value {
        CosValue::Dictionary(dict) => dict.len(),
        CosValue::Stream(stream) => stream.dict.len(),
        CosValue::Array(items) => items.len(),
        _ => 0,
    }
}

/// Re-derive the node at `path`.
pub fn node_at<'a>(doc: &'a Document, path: &[usize]) -> Option<TreeNode<'a>> {
    let mut node = root(doc);
    for &index in path {
        node = children(doc, node.value()).get(index).copied()?;
    }
    Some(node)
}

/// Flatten the tree into visible rows, in display order.
///
/// `expand` is asked for every expandable node whether its children are
/// shown. A node stored through a reference that is already open further
/// up the same branch is never expanded.
pub fn flatten<F>(doc: &Document, mut expand: F) -> Vec<TreeRow>
where
    F: FnMut(&[usize], usize) -> bool,
{
    let formatter = NodeFormatter::new();
    let mut rows = Vec::new();
    let mut path = Vec::new();
    let mut open_refs = Vec::new();
    flatten_node(
        doc,
        root(doc),
        &formatter,
        &mut expand,
        &mut path,
        &mut open_refs,
        true,
        &mut rows,
    );
    rows
}

#[allow(clippy::too_many_arguments)]
fn flatten_node<F>(
    doc: &Document,
    node: TreeNode<'_>,
    formatter: &NodeFormatter,
    expand: &mut F,
    path: &mut NodePath,
    open_refs: &mut Vec<ObjectRef>,
    is_last: bool,
    rows: &mut Vec<TreeRow>,
) where
    F: FnMut(&[usize], usize) -> bool,
{
    let depth = path.len();
    let reference = node.indirect();
    let is_cycle = reference.is_some_and(|r| open_refs.contains(&r));
    let has_children = !is_cycle && child_count(node.value()) > 0;
    let is_expanded = has_children && expand(path, depth);

    let rendered = formatter.render(&node);
    tracing::trace!(?path, label = %rendered.label, "Rendered tree row");

    rows.push(TreeRow {
        path: path.clone(),
        depth,
        has_children,
        is_expanded,
        is_last,
        reference,
        rendered,
    });

    if !is_expanded {
        return;
    }

    if let Some(r) = reference {
        open_refs.push(r);
    }

    let kids = children(doc, node.value());
    let total = kids.len();
    for (index, child) in kids.into_iter().enumerate() {
        path.push(index);
        flatten_node(
            doc,
            child,
            formatter,
            expand,
            path,
            open_refs,
            index + 1 == total,
            rows,
        );
        path.pop();
    }

    if reference.is_some() {
        open_refs.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cos::Stream;
    use crate::render::IconKind;

    fn sample() -> Document {
        let catalog = Dictionary::new()
            .with("Type", CosValue::name("Catalog"))
            .with("Pages", CosValue::reference(2, 0));
        let pages = Dictionary::new()
            .with("Type", CosValue::name("Pages"))
            .with("Kids", CosValue::Array(vec![CosValue::reference(3, 0)]))
            .with("Count", CosValue::Integer(1));
        let page = Dictionary::new()
            .with("Type", CosValue::name("Page"))
            .with("Parent", CosValue::reference(2, 0))
            .with("Contents", CosValue::reference(4, 0));
        let contents = Stream::new(
            Dictionary::new().with("Length", CosValue::Integer(5)),
            b"BT ET".to_vec(),
        );

        Document::new(
            Dictionary::new()
                .with("Size", CosValue::Integer(5))
                .with("Root", CosValue::reference(1, 0)),
        )
        .with_object(1, 0, CosValue::Dictionary(catalog))
        .with_object(2, 0, CosValue::Dictionary(pages))
        .with_object(3, 0, CosValue::Dictionary(page))
        .with_object(4, 0, CosValue::Stream(contents))
    }

    #[test]
    fn root_children_are_trailer_entries() {
        let doc = sample();
        let kids = children(&doc, doc.trailer());
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[1].indirect(), Some(ObjectRef::new(1, 0)));
    }

    #[test]
    fn node_at_follows_references() {
        let doc = sample();
        // Root -> Pages -> Kids -> [0]
        let node = node_at(&doc, &[1, 1, 1, 0]).unwrap();
        let rendered = NodeFormatter::new().render(&node);
        assert_eq!(rendered.label, "0:  (3) [3 0 R]");
        assert_eq!(rendered.icon, IconKind::Dict);
        assert_eq!(rendered.overlay, Some(IconKind::Indirect));

        assert!(node_at(&doc, &[7]).is_none());
    }

    #[test]
    fn flatten_collapsed_shows_only_root() {
        let doc = sample();
        let rows = flatten(&doc, |_, _| false);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].has_children);
        assert!(!rows[0].is_expanded);
        assert_eq!(rows[0].rendered.label, "(2)");
    }

    #[test]
    fn flatten_respects_depth() {
        let doc = sample();
        let rows = flatten(&doc, |_, depth| depth < 1);
        let labels: Vec<_> = rows.iter().map(|r| r.rendered.label.as_str()).collect();
        assert_eq!(labels, vec!["(2)", "Size:  5", "Root:  (2) [1 0 R]"]);
        assert!(rows[2].is_last);
        assert!(!rows[1].is_last);
    }

    #[test]
    fn flatten_does_not_reopen_ancestors() {
        let doc = sample();
        let rows = flatten(&doc, |_, depth| depth < 10);

        // the page's /Parent points back at the open pages node
        let parent = rows
            .iter()
            .find(|r| r.rendered.label.starts_with("Parent"))
            .unwrap();
        assert!(!parent.has_children);
        assert_eq!(parent.reference, Some(ObjectRef::new(2, 0)));

        // the content stream is expanded into its dictionary
        let contents = rows
            .iter()
            .find(|r| r.rendered.label.starts_with("Contents"))
            .unwrap();
        assert_eq!(contents.rendered.icon, IconKind::StreamDict);
        assert_eq!(contents.rendered.overlay, None);
        assert!(contents.is_expanded);
        assert!(rows.iter().any(|r| r.rendered.label == "Length:  5"));
    }
}
