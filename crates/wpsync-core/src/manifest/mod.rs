//! Wallpaper manifest document: load, validate, walk and save.
//!
//! The document is kept as an untyped `serde_json::Value` so fields this
//! crate does not know about (and their order) survive a rewrite. Only the
//! top-level `categories` list is validated; everything below it is checked
//! entry by entry while walking.

mod status;

pub use status::{inspect_manifest, CategoryStatus, ManifestStatus};

use crate::error::{Result, SyncError};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Display name used for categories without a string `name`.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// A manifest whose top level is an object with a `categories` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    doc: Value,
}

impl Manifest {
    /// Wraps a parsed document. Returns the value back if it has no `categories` list.
    pub fn from_value(doc: Value) -> std::result::Result<Self, Value> {
        match doc.get("categories") {
            Some(Value::Array(_)) => Ok(Self { doc }),
            _ => Err(doc),
        }
    }

    /// Reads and validates the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SyncError::ManifestNotFound(path.to_path_buf())
            } else {
                SyncError::ManifestRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let doc: Value = serde_json::from_str(&data).map_err(|source| SyncError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(doc).map_err(|_| SyncError::MissingCategories(path.to_path_buf()))
    }

    pub fn categories(&self) -> &[Value] {
        match self.doc.get("categories") {
            Some(Value::Array(list)) => list.as_slice(),
            _ => &[],
        }
    }

    pub fn categories_mut(&mut self) -> &mut [Value] {
        match self.doc.get_mut("categories") {
            Some(Value::Array(list)) => list.as_mut_slice(),
            _ => &mut [],
        }
    }

    /// Pretty-prints with 4-space indentation, keys in their original order.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.doc.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Overwrites `path` with the pretty-printed document. Not atomic.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_pretty_string()?;
        fs::write(path, text).map_err(|source| SyncError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The category's `name`, or `"unknown"` when absent or not a string.
pub fn category_name(category: &Value) -> String {
    category
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_CATEGORY)
        .to_string()
}

/// The category's `wallpapers` list, if the category is an object holding one.
pub fn wallpapers(category: &Value) -> Option<&Vec<Value>> {
    category.get("wallpapers").and_then(Value::as_array)
}

pub fn wallpapers_mut(category: &mut Value) -> Option<&mut Vec<Value>> {
    category.get_mut("wallpapers").and_then(Value::as_array_mut)
}
