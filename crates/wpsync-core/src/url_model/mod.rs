//! URL modeling and local reference derivation.
//!
//! Decides which manifest `url` values are remote, derives the file name a
//! remote asset is saved under, and renders the local reference written back
//! into the manifest.

mod path;
mod sanitize;

pub use path::filename_from_url;
pub use sanitize::sanitize_filename;

/// Linux NAME_MAX: longest single path component, in bytes.
pub const NAME_MAX: usize = 255;

use std::path::Path;

/// True if `url` starts with `http://` or `https://` (ASCII case-insensitive).
///
/// Everything else, including paths that already point into the asset
/// directory, counts as local and is left alone.
pub fn is_remote_url(url: &str) -> bool {
    has_prefix_ignore_case(url, "http://") || has_prefix_ignore_case(url, "https://")
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Derives the on-disk file name for a remote URL: last path segment,
/// query stripped, sanitized. `None` if the URL has no usable segment.
///
/// # Examples
///
/// - `derive_filename("http://x/img1.png")` → `Some("img1.png")`
/// - `derive_filename("https://cdn.example.com/a.jpg?w=800")` → `Some("a.jpg")`
/// - `derive_filename("https://example.com/gallery/")` → `None`
pub fn derive_filename(url: &str) -> Option<String> {
    filename_from_url(url).and_then(|raw| sanitize_filename(&raw))
}

/// Renders `<asset_dir>/<filename>` with forward slashes, the form stored in the manifest.
pub fn local_reference(asset_dir: &Path, filename: &str) -> String {
    asset_dir
        .join(filename)
        .to_string_lossy()
        .replace('\\', "/")
}
