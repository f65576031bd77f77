//! Label and icon classification for a single tree row.

use serde::Serialize;

use super::icon::IconKind;
use super::node::TreeNode;
use crate::cos::CosValue;

/// What a tree row shows: its label, its icon and an optional badge drawn
/// over the icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub label: String,
    pub icon: IconKind,
    pub overlay: Option<IconKind>,
}

/// Turns tree nodes into labels and icons.
///
/// Stateless: every call depends only on its argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeFormatter;

impl NodeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render one tree row.
    pub fn render(&self, node: &TreeNode<'_>) -> Rendered {
        Rendered {
            label: self.display_label(node),
            icon: self.icon_kind(node),
            overlay: self.overlay(node),
        }
    }

    /// The row label. Values without a dedicated format show their own text.
    pub fn display_label(&self, node: &TreeNode<'_>) -> String {
        match node {
            TreeNode::MapEntry(entry) => entry_label(entry.key.as_str(), entry.item, entry.value),
            TreeNode::ArrayEntry(entry) => {
                entry_label(&entry.index.to_string(), entry.item, entry.value)
            }
            TreeNode::Value(value) => value_label(value).unwrap_or_else(|| value.to_string()),
        }
    }

    /// The base icon, taken from the resolved value.
    pub fn icon_kind(&self, node: &TreeNode<'_>) -> IconKind {
        value_icon(node.value())
    }

    /// The `Indirect` badge for entries stored by reference.
    ///
    /// A referenced stream looks the same as an inline one, so it gets none.
    pub fn overlay(&self, node: &TreeNode<'_>) -> Option<IconKind> {
        match node.item() {
            Some(item) if item.is_reference() => match node.value() {
                CosValue::Stream(_) => None,
                _ => Some(IconKind::Indirect),
            },
            _ => None,
        }
    }
}

fn entry_label(key: &str, item: &CosValue, value: &CosValue) -> String {
    let mut label = key.to_string();

    let text = value_label(value).unwrap_or_default();
    if !text.is_empty() {
        label.push_str(":  ");
        label.push_str(&text);
        if let CosValue::Reference(reference) = item {
            label.push_str(&format!(" [{}]", reference));
        }
    }

    label
}

/// `None` for values shown with their plain text.
fn value_label(value: &CosValue) -> Option<String> {
    match value {
        CosValue::Real(real) => Some(format_real(*real)),
        CosValue::Integer(int) => Some(int.to_string()),
        CosValue::String(s) if s.is_printable() => Some(s.text()),
        CosValue::String(s) => Some(format!("<{}>", s.to_hex())),
        CosValue::Name(name) => Some(name.to_string()),
        CosValue::Null => Some(String::new()),
        CosValue::Dictionary(dict) if dict.is_xref_stream() => Some(String::new()),
        CosValue::Dictionary(dict) => Some(format!("({})", dict.len())),
        CosValue::Array(items) => Some(format!("({})", items.len())),
        _ => None,
    }
}

fn value_icon(value: &CosValue) -> IconKind {
    match value {
        CosValue::Real(_) => IconKind::Real,
        CosValue::Integer(_) => IconKind::Integer,
        CosValue::String(s) if s.is_printable() => IconKind::String,
        CosValue::String(_) => IconKind::Hex,
        CosValue::Name(_) => IconKind::Name,
        CosValue::Null => IconKind::None,
        CosValue::Stream(_) => IconKind::StreamDict,
        CosValue::Dictionary(_) => IconKind::Dict,
        CosValue::Array(_) => IconKind::Array,
        _ => IconKind::None,
    }
}

/// Whole reals keep a trailing `.0` so they read differently from integers.
fn format_real(real: f64) -> String {
    if real.is_finite() && real.fract() == 0.0 {
        format!("{:.1}", real)
    } else {
        real.to_string()
    }
}
