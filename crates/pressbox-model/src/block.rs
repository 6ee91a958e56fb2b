//! Block-level elements of a content document
//!
//! This module defines the discriminated union of block types an author can
//! produce: paragraphs, headings, lists, tables, images, quotes, code,
//! embeds, link previews, raw HTML, warnings, plus a fallback variant for
//! tags this engine does not recognize.

use serde::Serialize;

/// One typed unit of a content document.
///
/// The variant is fixed at decode time and never changes afterwards. Text
/// fields hold a restricted HTML subset and are only ever rendered through
/// the sanitizer boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Block {
    /// A paragraph of rich text
    Paragraph(Paragraph),
    /// A section heading
    Header(Header),
    /// An ordered or unordered list
    List(List),
    /// A pull quote with optional attribution
    Quote(Quote),
    /// A table of cell strings
    Table(Table),
    /// An image with optional caption
    Image(Image),
    /// A literal code snippet
    Code(Code),
    /// A thematic divider, no data
    Delimiter,
    /// A third-party media embed
    Embed(EmbedBlock),
    /// A link preview card
    LinkTool(EmbedBlock),
    /// Raw author-supplied HTML, sanitized like everything else
    Raw(Raw),
    /// A callout with a title and message
    Warning(Warning),
    /// Any unrecognized or structurally invalid element
    Unsupported(Unsupported),
}

impl Block {
    /// The wire tag this block renders and logs under.
    pub fn type_name(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Header(_) => "header",
            Block::List(_) => "list",
            Block::Quote(_) => "quote",
            Block::Table(_) => "table",
            Block::Image(_) => "image",
            Block::Code(_) => "code",
            Block::Delimiter => "delimiter",
            Block::Embed(_) => "embed",
            Block::LinkTool(_) => "linkTool",
            Block::Raw(_) => "raw",
            Block::Warning(_) => "warning",
            Block::Unsupported(u) => &u.original_type,
        }
    }
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Paragraph {
    /// Rich-text content (restricted HTML subset)
    pub text: String,
}

/// A section heading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Heading text
    pub text: String,
    /// Raw heading level as authored; clamped to [1,6] at render time
    pub level: i64,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    /// List style
    pub style: ListStyle,
    /// List items
    pub items: Vec<ListItem>,
}

/// List style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered list
    Ordered,
    /// Bullet list
    #[default]
    Unordered,
}

/// A single list item.
///
/// The authoring tool emits items either as plain strings or as objects
/// exposing a `content` string; both decode to renderable variants. Any
/// other JSON shape is preserved as `Invalid` with the offending JSON type
/// name, so the renderer can fail that one block with a diagnostic instead
/// of printing garbage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItem {
    /// Item authored as a bare string
    Plain(String),
    /// Item authored as an object with a `content` field
    Rich { content: String },
    /// Item of any other JSON shape; the value names the JSON type found
    Invalid { found: String },
}

impl ListItem {
    /// The renderable text of this item, if it has one.
    pub fn content(&self) -> Option<&str> {
        match self {
            ListItem::Plain(text) => Some(text),
            ListItem::Rich { content } => Some(content),
            ListItem::Invalid { .. } => None,
        }
    }
}

/// A table of rows of cell strings
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Whether the first row holds header cells
    pub with_headings: bool,
    /// Rows of cell content, row-major
    pub content: Vec<Vec<String>>,
}

/// A pull quote
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Quote {
    /// Quote body (restricted HTML subset)
    pub text: String,
    /// Attribution line
    pub caption: Option<String>,
    /// Alignment hint from the authoring tool, informational
    pub alignment: Option<String>,
}

/// An image block
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Image {
    /// Resolved source URL (`file.url` wins over `url` when both are present);
    /// `None` when the author supplied neither
    pub url: Option<String>,
    /// Caption text
    pub caption: Option<String>,
}

/// A literal code block
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Code {
    /// The code content; may carry pasted third-party embed markup
    pub code: String,
    /// Language hint
    pub language: Option<String>,
}

/// Shared payload of `embed` and `linkTool` blocks.
///
/// Authoring tools scatter the target URL over several field names; all four
/// are kept so the resolution order stays visible at the model level.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmbedBlock {
    pub link: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub embed: Option<String>,
    /// Caption text
    pub caption: Option<String>,
    /// Link preview metadata
    pub meta: Option<LinkMeta>,
}

impl EmbedBlock {
    /// The target URL, resolved in the order `link`, `url`, `source`, `embed`.
    pub fn target_url(&self) -> Option<&str> {
        [&self.link, &self.url, &self.source, &self.embed]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
    }
}

/// Link preview metadata carried by `linkTool` blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Preview image URL (`meta.image.url` on the wire)
    pub image_url: Option<String>,
}

/// Raw author-supplied HTML
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Raw {
    pub html: String,
}

/// A warning callout
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

/// Fallback for unrecognized block tags.
///
/// Carries only the original tag for diagnostic display, never the
/// unrecognized payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unsupported {
    pub original_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Block::Delimiter.type_name(), "delimiter");
        assert_eq!(
            Block::Paragraph(Paragraph::default()).type_name(),
            "paragraph"
        );
        let unsupported = Block::Unsupported(Unsupported {
            original_type: "futureType".to_string(),
        });
        assert_eq!(unsupported.type_name(), "futureType");
    }

    #[test]
    fn test_list_item_content() {
        assert_eq!(ListItem::Plain("one".to_string()).content(), Some("one"));
        assert_eq!(
            ListItem::Rich {
                content: "two".to_string()
            }
            .content(),
            Some("two")
        );
        assert_eq!(
            ListItem::Invalid {
                found: "number".to_string()
            }
            .content(),
            None
        );
    }

    #[test]
    fn test_embed_target_url_resolution_order() {
        let block = EmbedBlock {
            link: None,
            url: Some("https://example.com/from-url".to_string()),
            source: Some("https://example.com/from-source".to_string()),
            embed: None,
            caption: None,
            meta: None,
        };
        assert_eq!(block.target_url(), Some("https://example.com/from-url"));

        let link_wins = EmbedBlock {
            link: Some("https://example.com/from-link".to_string()),
            ..block.clone()
        };
        assert_eq!(
            link_wins.target_url(),
            Some("https://example.com/from-link")
        );
    }

    #[test]
    fn test_embed_target_url_skips_blank_fields() {
        let block = EmbedBlock {
            link: Some("  ".to_string()),
            url: None,
            source: Some("https://example.com/video".to_string()),
            embed: None,
            caption: None,
            meta: None,
        };
        assert_eq!(block.target_url(), Some("https://example.com/video"));
    }

    #[test]
    fn test_embed_target_url_none() {
        assert_eq!(EmbedBlock::default().target_url(), None);
    }
}
