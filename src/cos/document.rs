use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::value::{CosValue, Dictionary, ObjectRef};
use crate::error::DocumentError;

static NULL: CosValue = CosValue::Null;

/// Dereferences indirect references.
pub trait Resolve {
    /// Look up the object stored under `reference`.
    fn resolve(&self, reference: ObjectRef) -> Option<&CosValue>;

    /// Follow `value` through any chain of references to a direct value.
    ///
    /// Dangling references resolve to `null`, as PDF readers treat them.
    fn resolve_value<'a>(&'a self, value: &'a CosValue) -> &'a CosValue {
        let mut current = value;
        // A chain longer than this has a cycle in it.
        for _ in 0..=self.object_count() {
            match current {
                CosValue::Reference(r) => match self.resolve(*r) {
                    Some(target) => current = target,
                    None => {
                        tracing::warn!(reference = %r, "Unresolved indirect reference");
                        return &NULL;
                    }
                },
                direct => return direct,
            }
        }
        tracing::warn!(reference = %value, "Reference cycle while resolving");
        &NULL
    }

    fn object_count(&self) -> usize;
}

/// An in-memory document: the object table and the trailer dictionary.
#[derive(Debug, Clone)]
pub struct Document {
    objects: BTreeMap<ObjectRef, CosValue>,
    /// Always a dictionary; kept as a value so it can be a tree node.
    trailer: CosValue,
}

#[derive(Deserialize)]
struct DocumentRepr {
    #[serde(default)]
    objects: Vec<IndirectObject>,
    trailer: Dictionary,
}

#[derive(Deserialize)]
struct IndirectObject {
    number: u32,
    #[serde(default)]
    generation: u16,
    value: CosValue,
}

impl Document {
    pub fn new(trailer: Dictionary) -> Self {
        Self {
            objects: BTreeMap::new(),
            trailer: CosValue::Dictionary(trailer),
        }
    }

    pub fn with_object(mut self, number: u32, generation: u16, value: CosValue) -> Self {
        self.objects
            .insert(ObjectRef::new(number, generation), value);
        self
    }

    /// The trailer dictionary, the root of the object tree.
    pub fn trailer(&self) -> &CosValue {
        &self.trailer
    }

    pub fn trailer_get(&self, key: &str) -> Option<&CosValue> {
        match &self.trailer {
            CosValue::Dictionary(dict) => dict.get(key),
            _ => None,
        }
    }

    /// Parse a document from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let repr: DocumentRepr = serde_json::from_str(json)?;

        let mut objects = BTreeMap::new();
        for object in repr.objects {
            let reference = ObjectRef::new(object.number, object.generation);
            if objects.insert(reference, object.value).is_some() {
                return Err(DocumentError::DuplicateObject(reference));
            }
        }

        tracing::debug!(objects = objects.len(), "Parsed document");

        Ok(Self {
            objects,
            trailer: CosValue::Dictionary(repr.trailer),
        })
    }

    /// Read and parse a JSON document file.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }
}

impl Resolve for Document {
    fn resolve(&self, reference: ObjectRef) -> Option<&CosValue> {
        self.objects.get(&reference)
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(Dictionary::new().with("Root", CosValue::reference(1, 0)))
            .with_object(1, 0, CosValue::reference(2, 0))
            .with_object(2, 0, CosValue::Integer(42))
    }

    #[test]
    fn resolves_reference_chains() {
        let doc = sample();
        let root = doc.trailer_get("Root").unwrap();
        assert_eq!(doc.resolve_value(root), &CosValue::Integer(42));
    }

    #[test]
    fn direct_values_resolve_to_themselves() {
        let doc = sample();
        let value = CosValue::Integer(7);
        assert_eq!(doc.resolve_value(&value), &CosValue::Integer(7));
    }

    #[test]
    fn dangling_reference_is_null() {
        let doc = sample();
        let value = CosValue::reference(99, 0);
        assert_eq!(doc.resolve_value(&value), &CosValue::Null);
    }

    #[test]
    fn reference_cycle_is_null() {
        let doc = Document::new(Dictionary::new())
            .with_object(1, 0, CosValue::reference(2, 0))
            .with_object(2, 0, CosValue::reference(1, 0));
        let value = CosValue::reference(1, 0);
        assert_eq!(doc.resolve_value(&value), &CosValue::Null);
    }

    #[test]
    fn parses_json_document() {
        let doc = Document::from_json_str(
            r#"{
                "objects": [
                    {"number": 1, "value": {"Dictionary": [["Type", {"Name": "Catalog"}]]}}
                ],
                "trailer": [["Root", {"Reference": {"number": 1, "generation": 0}}]]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.object_count(), 1);
        let root = doc.resolve_value(doc.trailer_get("Root").unwrap());
        assert!(matches!(root, CosValue::Dictionary(d) if d.len() == 1));
    }

    #[test]
    fn rejects_duplicate_objects() {
        let result = Document::from_json_str(
            r#"{
                "objects": [
                    {"number": 1, "value": "Null"},
                    {"number": 1, "value": {"Integer": 2}}
                ],
                "trailer": []
            }"#,
        );
        assert!(matches!(result, Err(DocumentError::DuplicateObject(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = Document::from_json_str("{not json");
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }
}
