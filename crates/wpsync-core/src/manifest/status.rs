//! Read-only summary of how far a manifest is from being fully local.

use super::{category_name, wallpapers, Manifest};
use crate::url_model::is_remote_url;
use serde_json::Value;
use std::path::Path;

/// Entry counts for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStatus {
    pub name: String,
    /// False when the category has no well-formed `wallpapers` list (a sync skips it).
    pub has_wallpapers: bool,
    /// `url` is an HTTP(S) link; a sync would try to download it.
    pub remote: usize,
    /// `url` is a local path and the file exists.
    pub local_present: usize,
    /// `url` is a local path but nothing exists there.
    pub local_missing: usize,
    /// Not an object, or no string `url`.
    pub invalid: usize,
}

impl CategoryStatus {
    pub fn total(&self) -> usize {
        self.remote + self.local_present + self.local_missing + self.invalid
    }
}

/// Per-category status for a whole manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestStatus {
    pub categories: Vec<CategoryStatus>,
}

impl ManifestStatus {
    pub fn remote(&self) -> usize {
        self.categories.iter().map(|c| c.remote).sum()
    }

    pub fn local_missing(&self) -> usize {
        self.categories.iter().map(|c| c.local_missing).sum()
    }

    /// True when every entry points at a local file that exists.
    pub fn is_fully_local(&self) -> bool {
        self.categories
            .iter()
            .all(|c| c.remote == 0 && c.local_missing == 0 && c.invalid == 0)
    }
}

/// Walks `manifest` and checks local references against files under `base_dir`.
pub fn inspect_manifest(manifest: &Manifest, base_dir: &Path) -> ManifestStatus {
    let categories = manifest
        .categories()
        .iter()
        .map(|category| {
            let mut status = CategoryStatus {
                name: category_name(category),
                ..CategoryStatus::default()
            };
            let Some(list) = wallpapers(category) else {
                return status;
            };
            status.has_wallpapers = true;
            for entry in list {
                match entry.get("url").and_then(Value::as_str) {
                    Some(url) if is_remote_url(url) => status.remote += 1,
                    Some(local) if base_dir.join(local).is_file() => status.local_present += 1,
                    Some(_) => status.local_missing += 1,
                    None => status.invalid += 1,
                }
            }
            status
        })
        .collect();
    ManifestStatus { categories }
}
