use std::fmt;

use crate::cos::{CosValue, Name, ObjectRef, Resolve};

/// A value handed to the renderer for one tree row.
///
/// Entry nodes are built by the tree walker for a single render pass and
/// only borrow from the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeNode<'a> {
    /// A bare value, such as the tree root.
    Value(&'a CosValue),
    /// One key/value pair of a dictionary.
    MapEntry(MapEntry<'a>),
    /// One element of an array.
    ArrayEntry(ArrayEntry<'a>),
}

/// A dictionary entry as shown in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapEntry<'a> {
    pub key: &'a Name,
    /// The stored value: the value itself or a reference to it.
    pub item: &'a CosValue,
    /// The fully dereferenced value.
    pub value: &'a CosValue,
}

/// An array element as shown in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayEntry<'a> {
    pub index: usize,
    pub item: &'a CosValue,
    pub value: &'a CosValue,
}

impl<'a> MapEntry<'a> {
    pub fn new(key: &'a Name, item: &'a CosValue, value: &'a CosValue) -> Self {
        Self { key, item, value }
    }

    /// Build the entry, dereferencing `item` through `resolver`.
    pub fn resolve<R: Resolve + ?Sized>(key: &'a Name, item: &'a CosValue, resolver: &'a R) -> Self {
        Self::new(key, item, resolver.resolve_value(item))
    }
}

impl<'a> ArrayEntry<'a> {
    pub fn new(index: usize, item: &'a CosValue, value: &'a CosValue) -> Self {
        Self { index, item, value }
    }

    pub fn resolve<R: Resolve + ?Sized>(index: usize, item: &'a CosValue, resolver: &'a R) -> Self {
        Self::new(index, item, resolver.resolve_value(item))
    }
}

impl<'a> TreeNode<'a> {
    /// The value used for classification: the resolved value for entries,
    /// the value itself otherwise.
    pub fn value(&self) -> &'a CosValue {
        match *self {
            TreeNode::Value(value) => value,
            TreeNode::MapEntry(entry) => entry.value,
            TreeNode::ArrayEntry(entry) => entry.value,
        }
    }

    /// The stored item of an entry node.
    pub fn item(&self) -> Option<&'a CosValue> {
        match *self {
            TreeNode::Value(_) => None,
            TreeNode::MapEntry(entry) => Some(entry.item),
            TreeNode::ArrayEntry(entry) => Some(entry.item),
        }
    }

    /// The reference an entry is stored through, if any.
    pub fn indirect(&self) -> Option<ObjectRef> {
        self.item().and_then(CosValue::as_reference)
    }
}

impl<'a> From<&'a CosValue> for TreeNode<'a> {
    fn from(value: &'a CosValue) -> Self {
        TreeNode::Value(value)
    }
}

impl<'a> From<MapEntry<'a>> for TreeNode<'a> {
    fn from(entry: MapEntry<'a>) -> Self {
        TreeNode::MapEntry(entry)
    }
}

impl<'a> From<ArrayEntry<'a>> for TreeNode<'a> {
    fn from(entry: ArrayEntry<'a>) -> Self {
        TreeNode::ArrayEntry(entry)
    }
}

impl fmt::Display for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Value(value) => write!(f, "{}", value),
            TreeNode::MapEntry(entry) => write!(f, "{}", entry.key),
            TreeNode::ArrayEntry(entry) => write!(f, "{}", entry.index),
        }
    }
}
