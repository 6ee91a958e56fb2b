//! Behavior tests for derived metrics
//!
//! Metrics are pure functions of the decoded document: same input, same
//! numbers, no matter how often or in what order the calls happen.

use pressbox_engine::{extract_metrics, render, RenderOptions};

const FIXTURE: &str = r#"{"blocks":[
    {"type":"header","data":{"text":"Title","level":1}},
    {"type":"paragraph","data":{"text":"one two three"}},
    {"type":"list","data":{"style":"unordered","items":["four","five"]}}
]}"#;

#[test]
fn test_fixture_counts_at_default_rate() {
    let metrics = extract_metrics(FIXTURE, &RenderOptions::default()).unwrap();
    assert_eq!(metrics.plain_text, "Title one two three four five");
    assert_eq!(metrics.word_count, 6);
    assert_eq!(metrics.reading_time_minutes, 1);
}

#[test]
fn test_metrics_independent_of_call_order() {
    let options = RenderOptions::default();
    let before = extract_metrics(FIXTURE, &options).unwrap();
    // rendering in between must not disturb anything
    let _ = render(FIXTURE, &options).unwrap();
    let after = extract_metrics(FIXTURE, &options).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_caller_supplied_reading_rate() {
    let options = RenderOptions {
        words_per_minute: 2,
        ..RenderOptions::default()
    };
    let metrics = extract_metrics(FIXTURE, &options).unwrap();
    assert_eq!(metrics.reading_time_minutes, 3);
}

#[test]
fn test_first_image_from_image_block() {
    let raw = r#"{"blocks":[
        {"type":"paragraph","data":{"text":"report"}},
        {"type":"image","data":{"file":{"url":"https://cdn.example.com/hero.jpg"},"url":"https://cdn.example.com/other.jpg"}},
        {"type":"image","data":{"url":"https://cdn.example.com/second.jpg"}}
    ]}"#;
    let metrics = extract_metrics(raw, &RenderOptions::default()).unwrap();
    assert_eq!(
        metrics.first_image_url.as_deref(),
        Some("https://cdn.example.com/hero.jpg")
    );
}

#[test]
fn test_first_image_falls_back_to_inline_markup() {
    let raw = r#"{"blocks":[
        {"type":"paragraph","data":{"text":"text with <img src=\"https://cdn.example.com/inline.jpg\" alt=\"\"> image"}}
    ]}"#;
    let metrics = extract_metrics(raw, &RenderOptions::default()).unwrap();
    assert_eq!(
        metrics.first_image_url.as_deref(),
        Some("https://cdn.example.com/inline.jpg")
    );
}

#[test]
fn test_no_image_anywhere_is_none() {
    let metrics = extract_metrics(FIXTURE, &RenderOptions::default()).unwrap();
    assert_eq!(metrics.first_image_url, None);
}

#[test]
fn test_metrics_do_not_require_pre_decoding() {
    // corrupted input goes through the same repair as rendering
    let raw = r#"{"blocks":[{"type":"paragraph","data":{"text":"quote "here" ok"}}]}"#;
    let metrics = extract_metrics(raw, &RenderOptions::default()).unwrap();
    assert_eq!(metrics.word_count, 3);
}
