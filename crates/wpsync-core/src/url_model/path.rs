//! Filename extraction from URL path.

/// Returns the raw text after the last `/` of the URL, with query and fragment cut off.
///
/// The segment is taken from the input as written, so spaces, non-ASCII
/// characters and existing percent-escapes come through unchanged. The `url`
/// crate is only consulted to reject URLs whose path ends in `/` (including a
/// bare host).
pub fn filename_from_url(url: &str) -> Option<String> {
    if let Ok(parsed) = url::Url::parse(url) {
        if parsed.path().ends_with('/') {
            return None;
        }
    }
    let before_query = url.split(|c| c == '?' || c == '#').next().unwrap_or("");
    let segment = before_query.rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            filename_from_url("https://example.com/a/b/forest.jpg").as_deref(),
            Some("forest.jpg")
        );
        assert_eq!(
            filename_from_url("http://x/img1.png").as_deref(),
            Some("img1.png")
        );
    }

    #[test]
    fn strips_query_and_fragment() {
        assert_eq!(
            filename_from_url("https://images.example.com/photo-123.jpg?w=1920&q=80").as_deref(),
            Some("photo-123.jpg")
        );
        assert_eq!(
            filename_from_url("https://example.com/pic.webp#top").as_deref(),
            Some("pic.webp")
        );
        assert_eq!(
            filename_from_url("https://example.com/img.png?next=/other/path.jpg").as_deref(),
            Some("img.png")
        );
    }

    #[test]
    fn keeps_raw_segment_text() {
        assert_eq!(
            filename_from_url("http://x/my image.png").as_deref(),
            Some("my image.png")
        );
        assert_eq!(
            filename_from_url("http://x/日本.png").as_deref(),
            Some("日本.png")
        );
        assert_eq!(
            filename_from_url("http://x/already%20encoded.png").as_deref(),
            Some("already%20encoded.png")
        );
    }

    #[test]
    fn backslash_stays_in_segment() {
        assert_eq!(
            filename_from_url("http://x/a\\b.png").as_deref(),
            Some("a\\b.png")
        );
    }

    #[test]
    fn trailing_slash_or_root() {
        assert_eq!(filename_from_url("https://example.com/gallery/"), None);
        assert_eq!(filename_from_url("https://example.com/"), None);
        assert_eq!(filename_from_url("https://example.com"), None);
    }

    #[test]
    fn unparseable_falls_back_to_split() {
        assert_eq!(
            filename_from_url("http//broken/sunset.png?x=1").as_deref(),
            Some("sunset.png")
        );
    }
}
