//! Pre-parse repair of corrupted escaping in raw document strings
//!
//! The authoring tool double- and triple-escapes quotes inside HTML
//! attribute values embedded in text fields, leaving strings that are no
//! longer valid JSON. The passes here try the least invasive transform
//! first: aggressive global replacement can itself corrupt legitimate
//! apostrophes and quotes in Arabic or French prose, so the last pass is
//! scoped to `"text"` field values only.
//!
//! The heuristics were reverse-engineered from observed corrupted samples,
//! not from a documented upstream contract; the tests pin the known shapes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::ContentFormatError;

static TEXT_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""text"\s*:\s*""#).unwrap());

/// Repair a raw content string into one that parses as JSON.
///
/// Ordered attempts, first success wins:
///
/// 1. the input already parses: returned byte-for-byte unchanged;
/// 2. global normalization of the known escaped-quote variants
///    (`\&quot;`, `&quot;`, `\"`, collapsed `""` pairs, doubled backslashes);
/// 3. field-scoped re-escaping: interior literal quotes inside `"text"`
///    values are pushed into the entity domain as `&quot;`, to be decoded
///    again at render time.
///
/// When every pass fails the original parse error is reported as a
/// [`ContentFormatError::UnparsableJson`].
pub fn repair(raw: &str) -> Result<Cow<'_, str>, ContentFormatError> {
    let first_err = match parse_check(raw) {
        Ok(()) => return Ok(Cow::Borrowed(raw)),
        Err(err) => err,
    };

    let normalized = normalize_escapes(raw);
    if parse_check(&normalized).is_ok() {
        debug!("content repaired by global escape normalization");
        return Ok(Cow::Owned(normalized));
    }

    let requoted = requote_text_fields(&normalized);
    if parse_check(&requoted).is_ok() {
        debug!("content repaired by field-scoped quote re-escaping");
        return Ok(Cow::Owned(requoted));
    }

    warn!(error = %first_err, "content unparsable after all repair passes");
    Err(ContentFormatError::UnparsableJson(first_err.to_string()))
}

fn parse_check(text: &str) -> Result<(), serde_json::Error> {
    serde_json::from_str::<serde::de::IgnoredAny>(text).map(|_| ())
}

/// Collapse the escaped-quote variants the authoring tool is known to emit.
///
/// Replacement order matters: the backslashed entity must go before the bare
/// entity, and quote pairs are only collapsed after the single-character
/// variants have been rewritten.
fn normalize_escapes(raw: &str) -> String {
    raw.replace("\\&quot;", "\"")
        .replace("&quot;", "\"")
        .replace("\\\"", "\"")
        .replace("\"\"", "\"")
        .replace("\\\\", "\\")
}

/// Re-escape interior literal quotes inside `"text":"..."` values as
/// `&quot;`, so the surrounding string becomes valid JSON again.
///
/// The closing quote of a value is taken to be a `"` whose next non-space
/// character is `,` or `}` (or end of input). That boundary rule is the
/// tolerant part: it survives values that contain bare quotes, at the cost
/// of misjudging a value that itself ends in `"` followed by a comma inside
/// the text, which has not been observed in practice.
fn requote_text_fields(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    let mut pos = 0;

    while let Some(m) = TEXT_FIELD_RE.find_at(input, pos) {
        out.push_str(&input[pos..m.end()]);
        let (fixed, consumed) = requote_span(&input[m.end()..]);
        out.push_str(&fixed);
        pos = m.end() + consumed;
    }
    out.push_str(&input[pos..]);
    out
}

/// Rewrite one string value, returning the fixed content (including the
/// closing quote, when found) and the number of input bytes consumed.
fn requote_span(rest: &str) -> (String, usize) {
    let mut fixed = String::with_capacity(rest.len());
    let mut chars = rest.char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            // existing escape pairs pass through untouched
            '\\' => {
                fixed.push(ch);
                if let Some((_, next)) = chars.next() {
                    fixed.push(next);
                }
            }
            '"' => {
                if closes_value(&rest[i + 1..]) {
                    fixed.push('"');
                    return (fixed, i + 1);
                }
                fixed.push_str("&quot;");
            }
            _ => fixed.push(ch),
        }
    }
    (fixed, rest.len())
}

fn closes_value(tail: &str) -> bool {
    matches!(tail.trim_start().chars().next(), None | Some(',') | Some('}'))
}
