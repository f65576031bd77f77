//! Icon kinds and the icon image table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::IconError;

/// The kind of icon drawn next to a tree row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Array,
    Dict,
    Hex,
    Indirect,
    Integer,
    Name,
    Real,
    StreamDict,
    String,
    /// No icon is drawn.
    None,
}

impl IconKind {
    /// Every kind that has an image.
    pub const IMAGES: [IconKind; 9] = [
        IconKind::Array,
        IconKind::Dict,
        IconKind::Hex,
        IconKind::Indirect,
        IconKind::Integer,
        IconKind::Name,
        IconKind::Real,
        IconKind::StreamDict,
        IconKind::String,
    ];

    /// Image file stem, `None` for [`IconKind::None`].
    pub fn file_stem(self) -> Option<&'static str> {
        match self {
            IconKind::Array => Some("array"),
            IconKind::Dict => Some("dict"),
            IconKind::Hex => Some("hex"),
            IconKind::Indirect => Some("indirect"),
            IconKind::Integer => Some("integer"),
            IconKind::Name => Some("name"),
            IconKind::Real => Some("real"),
            IconKind::StreamDict => Some("stream-dict"),
            IconKind::String => Some("string"),
            IconKind::None => None,
        }
    }

    /// Short text stand-in used by terminal renderers.
    pub fn tag(self) -> &'static str {
        match self {
            IconKind::Array => "arr",
            IconKind::Dict => "dict",
            IconKind::Hex => "hex",
            IconKind::Indirect => "ref",
            IconKind::Integer => "int",
            IconKind::Name => "name",
            IconKind::Real => "real",
            IconKind::StreamDict => "strm",
            IconKind::String => "str",
            IconKind::None => "",
        }
    }
}

/// Icon images keyed by kind, loaded once from `<base-path>/<icon-name>.png`.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    base: PathBuf,
    images: HashMap<IconKind, Vec<u8>>,
}

impl IconSet {
    /// Load every icon image found under `base`.
    ///
    /// Unreadable images are logged and left out; the row is then drawn
    /// without that icon.
    pub fn load(base: &Path) -> Result<Self, IconError> {
        if !base.is_dir() {
            return Err(IconError::NotADirectory(base.to_path_buf()));
        }

        let mut images = HashMap::new();
        for kind in IconKind::IMAGES {
            let Some(path) = image_path(base, kind) else {
                continue;
            };
            match std::fs::read(&path) {
                Ok(bytes) => {
                    images.insert(kind, bytes);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Missing icon image");
                }
            }
        }

        tracing::debug!(base = %base.display(), loaded = images.len(), "Loaded icon set");

        Ok(Self {
            base: base.to_path_buf(),
            images,
        })
    }

    /// Path of the image for `kind`, if it was loaded.
    pub fn image_path(&self, kind: IconKind) -> Option<PathBuf> {
        if self.images.contains_key(&kind) {
            image_path(&self.base, kind)
        } else {
            None
        }
    }

    pub fn image(&self, kind: IconKind) -> Option<&[u8]> {
        self.images.get(&kind).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn image_path(base: &Path, kind: IconKind) -> Option<PathBuf> {
    kind.file_stem().map(|stem| base.join(format!("{}.png", stem)))
}
