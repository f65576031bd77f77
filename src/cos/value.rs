use std::fmt;

use serde::{Deserialize, Serialize};

use super::encoding;
use crate::error::DocumentError;

/// Type name carried by cross-reference streams (`/Type /XRef`).
pub const XREF_TYPE: &str = "XRef";

/// A PDF name object, stored without the leading slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Pointer to an object in the document's object table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectRef {
    pub number: u32,
    #[serde(default)]
    pub generation: u16,
}

impl ObjectRef {
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

/// A string object. PDF strings are byte strings; the decoded text is
/// derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StringRepr", into = "StringRepr")]
pub struct CosString {
    bytes: Vec<u8>,
}

impl CosString {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Encode text the way a writer would: PDFDocEncoding when every
    /// character has a byte, UTF-16BE with a byte order mark otherwise.
    pub fn from_text(text: &str) -> Self {
        let single: Option<Vec<u8>> = text.chars().map(encoding::encode_char).collect();
        let bytes = single.unwrap_or_else(|| {
            let mut bytes = vec![0xFE, 0xFF];
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
            bytes
        });
        Self { bytes }
    }

    pub fn from_hex(hex: &str) -> Result<Self, DocumentError> {
        decode_hex(hex).map(Self::from_bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decoded text: UTF-16 when the bytes start with a byte order mark,
    /// PDFDocEncoding otherwise.
    pub fn text(&self) -> String {
        match self.bytes.as_slice() {
            [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
            [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
            bytes => encoding::decode(bytes),
        }
    }

    /// Uppercase hex of the raw bytes.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.bytes)
    }

    /// True when the decoded text holds no ISO control characters.
    pub fn is_printable(&self) -> bool {
        !self.text().chars().any(char::is_control)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StringRepr {
    Text(String),
    Hex(String),
}

impl TryFrom<StringRepr> for CosString {
    type Error = DocumentError;

    fn try_from(repr: StringRepr) -> Result<Self, Self::Error> {
        match repr {
            StringRepr::Text(text) => Ok(CosString::from_text(&text)),
            StringRepr::Hex(hex) => CosString::from_hex(&hex),
        }
    }
}

impl From<CosString> for StringRepr {
    fn from(s: CosString) -> Self {
        if s.is_printable() {
            StringRepr::Text(s.text())
        } else {
            StringRepr::Hex(s.to_hex())
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    // An odd trailing byte is padded with zero.
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| match pair {
            [a, b] => unit([*a, *b]),
            [a] => unit([*a, 0]),
            _ => 0,
        })
        .collect();
    String::from_utf16_lossy(&units)
}

pub(crate) fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

pub(crate) fn decode_hex(hex: &str) -> Result<Vec<u8>, DocumentError> {
    let digits: Vec<u8> = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| DocumentError::InvalidHex(hex.to_string()))
        })
        .collect::<Result<_, _>>()?;

    // An odd trailing digit is padded with zero, as PDF hex strings are.
    Ok(digits
        .chunks(2)
        .map(|pair| match pair {
            [hi, lo] => (hi << 4) | lo,
            [hi] => hi << 4,
            _ => 0,
        })
        .collect())
}

/// A dictionary with its entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: Vec<(Name, CosValue)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<Name>, value: CosValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: &str, value: CosValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&CosValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &CosValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// The `/Type` entry, when it is a direct name.
    pub fn type_name(&self) -> Option<&Name> {
        match self.get("Type") {
            Some(CosValue::Name(name)) => Some(name),
            _ => None,
        }
    }

    pub fn is_xref_stream(&self) -> bool {
        self.type_name()
            .is_some_and(|name| name.as_str() == XREF_TYPE)
    }
}

/// A stream: a dictionary plus (undecoded) data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub dict: Dictionary,
    #[serde(default)]
    pub data: CosString,
}

impl Default for CosString {
    fn default() -> Self {
        Self::from_bytes(Vec::new())
    }
}

impl Stream {
    pub fn new(dict: Dictionary, data: impl Into<Vec<u8>>) -> Self {
        Self {
            dict,
            data: CosString::from_bytes(data),
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stream ({} bytes)", self.data.as_bytes().len())
    }
}

/// Any value of the document object model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CosValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(CosString),
    Name(Name),
    Array(Vec<CosValue>),
    Dictionary(Dictionary),
    Stream(Stream),
    Reference(ObjectRef),
}

impl CosValue {
    pub fn name(name: &str) -> Self {
        CosValue::Name(Name::new(name))
    }

    pub fn text(text: &str) -> Self {
        CosValue::String(CosString::from_text(text))
    }

    pub fn reference(number: u32, generation: u16) -> Self {
        CosValue::Reference(ObjectRef::new(number, generation))
    }

    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            CosValue::Reference(r) => Some(*r),
            _ => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, CosValue::Reference(_))
    }
}

impl fmt::Display for CosValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CosValue::Null => f.write_str("null"),
            CosValue::Boolean(b) => write!(f, "{}", b),
            CosValue::Integer(i) => write!(f, "{}", i),
            CosValue::Real(r) => write!(f, "{}", r),
            CosValue::String(s) if s.is_printable() => write!(f, "({})", s.text()),
            CosValue::String(s) => write!(f, "<{}>", s.to_hex()),
            CosValue::Name(n) => write!(f, "/{}", n),
            CosValue::Array(items) => write!(f, "[{} items]", items.len()),
            CosValue::Dictionary(dict) => write!(f, "<<{} entries>>", dict.len()),
            CosValue::Stream(stream) => write!(f, "{}", stream),
            CosValue::Reference(r) => write!(f, "{}", r),
        }
    }
}
