//! Video reference resolution for recognized YouTube URL shapes.
//!
//! Accepted forms: `youtube.com/watch?v=ID`, `youtu.be/ID`,
//! `youtube.com/embed/ID`, `youtube.com/v/ID`, and `&v=ID` query tails.
//! Anything else yields no identifier and the video is treated as
//! unavailable.

use std::sync::LazyLock;

use regex::Regex;

/// YouTube video ids are exactly 11 characters.
const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|watch\?v=|&v=)([^#&?]*)")
        .expect("video id pattern is valid")
});

/// Extract the 11-character video id from a recognized URL, or `None`.
pub fn video_id(url: &str) -> Option<&str> {
    if url.is_empty() {
        return None;
    }
    let captures = VIDEO_ID_RE.captures(url)?;
    let id = captures.get(1)?.as_str();
    if id.len() == VIDEO_ID_LEN {
        Some(id)
    } else {
        None
    }
}

/// Derive the high-resolution thumbnail URL for a recognized video URL.
pub fn thumbnail_url(url: &str) -> Option<String> {
    let id = video_id(url)?;
    Some(format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
}

/// Generated placeholder image for courses without a resolvable thumbnail.
/// Uses the first characters of the title as the placeholder text.
pub fn placeholder_thumbnail(title: &str) -> String {
    let text: String = title.chars().take(3).collect();
    format!("https://placehold.co/600x400/png?text={text}")
}
