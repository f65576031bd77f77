//! Minimal document object model: values, dictionaries, streams and
//! indirect references, plus the document that resolves them.

mod document;
mod encoding;
mod value;

pub use document::{Document, Resolve};
pub use value::{CosString, CosValue, Dictionary, Name, ObjectRef, Stream, XREF_TYPE};
