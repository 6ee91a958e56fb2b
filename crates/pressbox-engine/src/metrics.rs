//! Derived metrics over a decoded document
//!
//! Plain text, word count, reading time, and first-image extraction are
//! pure functions of the decoded block list, not of rendered markup, so
//! list-view summaries and thumbnails never pay the full render cost.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use pressbox_model::{Block, Document};

use crate::error::ContentFormatError;
use crate::render::RenderOptions;

/// Default reading speed. Tuned per deployment: Arabic and Latin-script
/// reading speeds differ materially, so callers override this through
/// [`RenderOptions::words_per_minute`].
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img[^>]*\bsrc\s*=\s*["']([^"']+)["']"#).unwrap());

/// Metrics derived from a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    /// Tag-stripped, entity-decoded, whitespace-normalized text
    pub plain_text: String,
    /// Count of whitespace-separated tokens in the plain text
    pub word_count: usize,
    /// `ceil(word_count / words_per_minute)`
    pub reading_time_minutes: u32,
    /// URL of the first image block, or of the first `<img>` found inside
    /// raw/paragraph HTML when no image block exists
    pub first_image_url: Option<String>,
}

/// Repair, decode, and derive metrics from a raw content string.
pub fn extract_metrics(
    raw: &str,
    options: &RenderOptions,
) -> Result<ContentMetrics, ContentFormatError> {
    let doc = crate::decode::decode(raw)?;
    Ok(document_metrics(&doc, options.words_per_minute))
}

/// Derive metrics from an already-decoded document.
pub fn document_metrics(doc: &Document, words_per_minute: u32) -> ContentMetrics {
    let plain_text = plain_text_of(doc);
    let word_count = plain_text.split_whitespace().count();
    let words_per_minute = words_per_minute.max(1) as usize;
    ContentMetrics {
        reading_time_minutes: word_count.div_ceil(words_per_minute) as u32,
        first_image_url: first_image_url(doc),
        plain_text,
        word_count,
    }
}

/// Concatenate the text-bearing fields of every block, strip inline
/// markup, decode entities, and normalize whitespace.
fn plain_text_of(doc: &Document) -> String {
    let mut parts = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => parts.push(strip_markup(&p.text)),
            Block::Header(h) => parts.push(strip_markup(&h.text)),
            Block::Quote(q) => parts.push(strip_markup(&q.text)),
            Block::List(l) => {
                parts.extend(l.items.iter().filter_map(|item| {
                    item.content().map(strip_markup)
                }));
            }
            Block::Table(t) => {
                parts.extend(t.content.iter().flatten().map(|cell| strip_markup(cell)));
            }
            _ => {}
        }
    }
    let joined = parts.join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_markup(text: &str) -> String {
    decode_entities(&TAG_RE.replace_all(text, " "))
}

/// Decode the HTML entities that matter for text metrics. The ampersand
/// comes after the named entities so `&amp;nbsp;` does not collapse twice.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&#xa0;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}

/// The first image URL in document order: image blocks win, then `<img>`
/// tags pattern-matched inside raw/paragraph HTML.
fn first_image_url(doc: &Document) -> Option<String> {
    for block in &doc.blocks {
        if let Block::Image(image) = block {
            if let Some(url) = image.url.as_deref().filter(|url| !url.trim().is_empty()) {
                return Some(url.to_string());
            }
        }
    }
    for block in &doc.blocks {
        let html = match block {
            Block::Raw(raw) => &raw.html,
            Block::Paragraph(p) => &p.text,
            _ => continue,
        };
        if let Some(caps) = IMG_SRC_RE.captures(html) {
            return Some(caps[1].to_string());
        }
    }
    None
}
