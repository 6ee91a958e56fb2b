//! pressbox-engine - rich-content rendering for block documents
//!
//! The engine consumes a single raw string (a block document as JSON,
//! frequently corrupted by upstream quote-escaping) and produces sanitized
//! display fragments plus derived metrics. It repairs the escaping before
//! parsing, decodes block-level faults into placeholders instead of
//! failing the page, funnels every text field through one allow-listed
//! sanitizer, and recognizes Twitter/X, Instagram, YouTube and Vimeo URLs
//! wherever they hide.
//!
//! Everything is synchronous and pure: no I/O, no shared state, safe to
//! call concurrently from many article cards at once.
//!
//! # Example
//!
//! ```
//! use pressbox_engine::{extract_metrics, render, RenderOptions};
//!
//! let raw = r#"{"blocks":[
//!     {"type":"header","data":{"text":"Derby day","level":2}},
//!     {"type":"paragraph","data":{"text":"The rivals meet <b>tonight</b>"}}
//! ]}"#;
//!
//! let output = render(raw, &RenderOptions::default()).unwrap();
//! assert_eq!(output.fragments.len(), 2);
//!
//! let metrics = extract_metrics(raw, &RenderOptions::default()).unwrap();
//! assert_eq!(metrics.word_count, 6);
//! ```

pub mod decode;
pub mod embed;
pub mod error;
pub mod metrics;
pub mod render;
pub mod repair;
pub mod sanitize;

// Re-export main types and functions
pub use decode::decode;
pub use embed::{classify, scan_text, twitter_in_markup, TextSegment};
pub use error::{BlockRenderError, ContentFormatError};
pub use metrics::{document_metrics, extract_metrics, ContentMetrics, DEFAULT_WORDS_PER_MINUTE};
pub use render::{render, render_html, HtmlRenderer, RenderOptions, RenderOutput};
pub use repair::repair;
pub use sanitize::{sanitize, sanitize_with_tags, ALLOWED_TAGS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
