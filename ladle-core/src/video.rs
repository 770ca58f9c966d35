//! Best-effort extraction of a video identifier from external video URLs.

use std::sync::LazyLock;

use regex::Regex;

/// Fixed identifier length on the external video platform.
const VIDEO_ID_LEN: usize = 11;

/// Recognizes the short-link (`youtu.be/`), parameter (`watch?v=`),
/// embed-path (`embed/`), bare `v/` and legacy user-path (`/u/x/`) URL
/// shapes, capturing whatever follows up to a `#`, `&` or `?`.
static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(?:youtu\.be/|v/|/u/\w/|embed/|watch\?)\??v?=?([^#&?]*)")
        .expect("Invalid video URL regex")
});

/// Extract the 11-character video identifier from a loosely-structured
/// video URL, if it has one.
///
/// This is a heuristic, not a URL parser: ambiguous or malformed input is
/// a non-match, never an error. `None` input yields `None`.
pub fn extract_youtube_id(url: Option<&str>) -> Option<String> {
    let url = url?;

    let captured = VIDEO_URL.captures(url)?.get(1)?.as_str();
    if captured.len() == VIDEO_ID_LEN {
        Some(captured.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(
            extract_youtube_id(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_from_short_and_embed_urls() {
        assert_eq!(
            extract_youtube_id(Some("https://youtu.be/dQw4w9WgXcQ")),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_youtube_id(Some("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0")),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn rejects_none_and_non_matches() {
        assert_eq!(extract_youtube_id(None), None);
        assert_eq!(extract_youtube_id(Some("https://example.com/video")), None);
        assert_eq!(
            extract_youtube_id(Some("https://www.youtube.com/watch?v=tooshort")),
            None
        );
    }
}
