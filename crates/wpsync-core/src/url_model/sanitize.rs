//! Filesystem-safe filename sanitization.

use super::NAME_MAX;
use crate::fetch::PART_SUFFIX;

/// Longest name kept, leaving room for the in-flight `.part` suffix.
pub const MAX_FILENAME_LEN: usize = NAME_MAX - PART_SUFFIX.len();

/// Sanitizes a URL-derived filename so it stays inside the asset directory.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing spaces, dots and underscores
/// - Limits length to [`MAX_FILENAME_LEN`] bytes (250)
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let replacement = if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            '_'
        } else {
            c
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.' || c == '_');

    let capped = if trimmed.len() > MAX_FILENAME_LEN {
        let mut take = MAX_FILENAME_LEN;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        &trimmed[..take]
    } else {
        trimmed
    };

    if capped.is_empty() {
        None
    } else {
        Some(capped.to_string())
    }
}
