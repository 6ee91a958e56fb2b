//! Provider URL classification and free-text embed scanning
//!
//! Classifies candidate URLs into [`EmbedReference`]s and scans arbitrary
//! HTML/text for bare provider URLs that were never modeled as embed
//! blocks: a tweet link pasted into a paragraph, or literal Twitter
//! `<blockquote>` markup dropped into a code block.

use std::sync::LazyLock;

use regex::Regex;

use pressbox_model::{EmbedProvider, EmbedReference};

static TWITTER_STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:twitter\.com|x\.com)/([A-Za-z0-9_]+)/status(?:es)?/(\d+)").unwrap()
});

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:youtube\.com/(?:watch\?(?:[^\s&#]*&)*v=|embed/|shorts/|v/)|youtu\.be/)([A-Za-z0-9_-]+)",
    )
    .unwrap()
});

static VIMEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bvimeo\.com/(?:video/)?(\d+)").unwrap());

static INSTAGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\binstagram\.com/(p|tv|reel)/([A-Za-z0-9_-]+)").unwrap()
});

static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s"'<>]+"#).unwrap());

static TWITTER_BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<blockquote[^>]*class\s*=\s*"[^"]*twitter-tweet"#).unwrap()
});

/// One piece of a scanned source string, in original order.
#[derive(Debug, Clone, PartialEq)]
pub enum TextSegment {
    /// Plain source text between matches; still needs sanitizing
    Text(String),
    /// A promoted provider URL
    Embed(EmbedReference),
}

/// Classify a candidate URL into an [`EmbedReference`].
///
/// A URL that superficially looks like a provider link but fails ID
/// extraction (a profile URL, malformed digits, a missing shortcode) falls
/// back to `Generic` rather than producing a broken embed.
pub fn classify(url: &str) -> EmbedReference {
    if let Some(caps) = TWITTER_STATUS_RE.captures(url) {
        let handle = &caps[1];
        let id = &caps[2];
        return EmbedReference {
            provider: EmbedProvider::Twitter,
            id: Some(id.to_string()),
            // the widget script only recognizes the twitter.com host
            canonical_url: format!("https://twitter.com/{handle}/status/{id}"),
        };
    }
    if let Some(caps) = YOUTUBE_RE.captures(url) {
        let id = &caps[1];
        return EmbedReference {
            provider: EmbedProvider::Youtube,
            id: Some(id.to_string()),
            canonical_url: format!("https://www.youtube.com/watch?v={id}"),
        };
    }
    if let Some(caps) = VIMEO_RE.captures(url) {
        let id = &caps[1];
        return EmbedReference {
            provider: EmbedProvider::Vimeo,
            id: Some(id.to_string()),
            canonical_url: format!("https://vimeo.com/{id}"),
        };
    }
    if let Some(caps) = INSTAGRAM_RE.captures(url) {
        let kind = caps[1].to_lowercase();
        let shortcode = &caps[2];
        return EmbedReference {
            provider: EmbedProvider::Instagram,
            id: Some(shortcode.to_string()),
            canonical_url: format!("https://www.instagram.com/{kind}/{shortcode}/"),
        };
    }
    EmbedReference::generic(url.trim())
}

/// Scan free text or HTML for bare provider URLs and split it into
/// segments around each promoted match.
///
/// Only URLs that classify to a concrete provider with an extracted ID are
/// promoted; generic URLs stay embedded in their text segment. A Twitter
/// profile link without a `/status/<digits>` path is never promoted.
pub fn scan_text(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut pos = 0;

    for m in BARE_URL_RE.find_iter(text) {
        let reference = classify(m.as_str());
        if reference.provider == EmbedProvider::Generic {
            continue;
        }
        if m.start() > pos {
            segments.push(TextSegment::Text(text[pos..m.start()].to_string()));
        }
        segments.push(TextSegment::Embed(reference));
        pos = m.end();
    }

    if pos < text.len() {
        segments.push(TextSegment::Text(text[pos..].to_string()));
    }
    segments
}

/// Detect pasted Twitter embed markup: a `<blockquote class="twitter-tweet">`
/// wrapper with a status link somewhere inside it.
pub fn twitter_in_markup(html: &str) -> Option<EmbedReference> {
    if !TWITTER_BLOCKQUOTE_RE.is_match(html) {
        return None;
    }
    let caps = TWITTER_STATUS_RE.captures(html)?;
    let handle = &caps[1];
    let id = &caps[2];
    Some(EmbedReference {
        provider: EmbedProvider::Twitter,
        id: Some(id.to_string()),
        canonical_url: format!("https://twitter.com/{handle}/status/{id}"),
    })
}
