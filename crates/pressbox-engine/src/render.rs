//! HTML Block Renderer
//!
//! This module turns a decoded [`Document`] into displayable output: a flat
//! sequence of [`RenderedFragment`]s. Most block types become sanitized
//! HTML; Twitter and Instagram references become live-embed placeholders
//! the host UI mounts with the provider's widget script.
//!
//! A failing block never takes the document down: the renderer catches the
//! failure and substitutes an inline error fragment at that position.
//!
//! # Example
//!
//! ```
//! use pressbox_engine::render::{render, RenderOptions};
//!
//! let raw = r#"{"blocks":[{"type":"paragraph","data":{"text":"<b>Kickoff</b> at nine"}}]}"#;
//! let output = render(raw, &RenderOptions::default()).unwrap();
//! assert_eq!(output.fragments.len(), 1);
//! ```

use serde::Serialize;
use tracing::warn;

use pressbox_model::{
    Block, Code, Document, EmbedBlock, EmbedProvider, Header, Image, List, ListItem, ListStyle,
    Paragraph, Quote, Raw, RenderedFragment, Table, Unsupported, Warning,
};

use crate::decode::decode;
use crate::embed::{classify, scan_text, twitter_in_markup, TextSegment};
use crate::error::{BlockRenderError, ContentFormatError};
use crate::metrics::DEFAULT_WORDS_PER_MINUTE;
use crate::sanitize::{html_escape, is_safe_url, sanitize, sanitize_with_tags};

/// Inline tags acceptable where nested block or anchor markup would be
/// invalid (link labels, warning titles).
const INLINE_TAGS: &[&str] = &["b", "i", "strong", "em", "span", "br"];

/// Rendering options supplied by the caller.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Reading speed for the reading-time estimate. Arabic and Latin-script
    /// reading speeds differ materially, so the caller chooses instead of
    /// the engine guessing from content.
    pub words_per_minute: u32,
    /// Narrowed sanitizer allow-list; `None` keeps the default list.
    /// Narrowing only: tags outside the default list are ignored.
    pub allowed_tags: Option<Vec<String>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            allowed_tags: None,
        }
    }
}

/// Rendered output for a whole document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    pub fragments: Vec<RenderedFragment>,
}

/// Render a raw content string end to end: repair, decode, render.
///
/// The only error that crosses this boundary is [`ContentFormatError`];
/// individual block failures surface as inline error fragments.
pub fn render(raw: &str, options: &RenderOptions) -> Result<RenderOutput, ContentFormatError> {
    let doc = decode(raw)?;
    let renderer = HtmlRenderer::with_options(options.clone());
    Ok(RenderOutput {
        fragments: renderer.render_document(&doc),
    })
}

/// Render CMS-sourced HTML without block decoding.
///
/// The lighter path for documents that arrive as HTML instead of block
/// JSON: the markup is sanitized and scanned for bare provider links,
/// which are lifted out as live-embed placeholders.
pub fn render_html(html: &str, options: &RenderOptions) -> Vec<RenderedFragment> {
    HtmlRenderer::with_options(options.clone()).render_html(html)
}

/// Block-to-fragment renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render every block of a document, in order.
    ///
    /// Block failures are contained here: the failing block is replaced by
    /// an inline error fragment and every sibling still renders.
    pub fn render_document(&self, doc: &Document) -> Vec<RenderedFragment> {
        let mut fragments = Vec::new();
        for block in &doc.blocks {
            match self.render_block(block) {
                Ok(rendered) => fragments.extend(rendered),
                Err(err) => {
                    warn!(
                        block_type = %err.block_type,
                        reason = %err.reason,
                        "block failed to render, substituting placeholder",
                    );
                    fragments.push(Self::error_fragment());
                }
            }
        }
        fragments
    }

    /// Render free HTML: sanitize and lift bare provider links.
    pub fn render_html(&self, html: &str) -> Vec<RenderedFragment> {
        self.rich_text_fragments(html, None)
    }

    /// Render a single block.
    ///
    /// A block usually yields one fragment. An image without a resolvable
    /// URL yields none; a text field with inline provider links yields one
    /// fragment per segment.
    pub fn render_block(&self, block: &Block) -> Result<Vec<RenderedFragment>, BlockRenderError> {
        match block {
            Block::Paragraph(p) => Ok(self.render_paragraph(p)),
            Block::Header(h) => Ok(vec![self.render_header(h)]),
            Block::List(l) => self.render_list(l).map(|f| vec![f]),
            Block::Quote(q) => Ok(vec![self.render_quote(q)]),
            Block::Table(t) => Ok(vec![self.render_table(t)]),
            Block::Image(i) => Ok(self.render_image(i)),
            Block::Code(c) => Ok(vec![self.render_code(c)]),
            Block::Delimiter => Ok(vec![RenderedFragment::static_html("<hr>")]),
            Block::Embed(e) => self.render_embed_block(e, "embed").map(|f| vec![f]),
            Block::LinkTool(e) => self.render_embed_block(e, "linkTool").map(|f| vec![f]),
            Block::Raw(r) => Ok(self.render_raw(r)),
            Block::Warning(w) => Ok(vec![self.render_warning(w)]),
            Block::Unsupported(u) => Ok(vec![Self::render_unsupported(u)]),
        }
    }

    fn render_paragraph(&self, paragraph: &Paragraph) -> Vec<RenderedFragment> {
        self.rich_text_fragments(&paragraph.text, Some("p"))
    }

    fn render_header(&self, header: &Header) -> RenderedFragment {
        // malformed input may say level 0 or 9
        let level = header.level.clamp(1, 6);
        let text = self.clean(&clean_quote_entities(&header.text));
        RenderedFragment::static_html(format!("<h{level}>{text}</h{level}>"))
    }

    fn render_list(&self, list: &List) -> Result<RenderedFragment, BlockRenderError> {
        let tag = match list.style {
            ListStyle::Ordered => "ol",
            ListStyle::Unordered => "ul",
        };
        let mut html = format!("<{tag}>");
        for item in &list.items {
            match item {
                ListItem::Plain(_) | ListItem::Rich { .. } => {
                    let content = item.content().unwrap_or_default();
                    html.push_str(&format!("<li>{}</li>", self.clean(content)));
                }
                ListItem::Invalid { found } => {
                    return Err(BlockRenderError::new(
                        "list",
                        format!("list item of type `{found}` is not renderable"),
                    ));
                }
            }
        }
        html.push_str(&format!("</{tag}>"));
        Ok(RenderedFragment::static_html(html))
    }

    fn render_quote(&self, quote: &Quote) -> RenderedFragment {
        let text = self.clean(&clean_quote_entities(&quote.text));
        let caption = quote
            .caption
            .as_deref()
            .map(|caption| self.clean_inline(caption))
            .filter(|caption| !caption.trim().is_empty());
        let html = match caption {
            Some(caption) => {
                format!("<blockquote><p>{text}</p><cite>{caption}</cite></blockquote>")
            }
            None => format!("<blockquote><p>{text}</p></blockquote>"),
        };
        RenderedFragment::static_html(html)
    }

    /// Cells are sanitized one by one, so a single bad cell cannot corrupt
    /// the markup of its row.
    fn render_table(&self, table: &Table) -> RenderedFragment {
        let mut html = String::from("<table>");
        for (index, row) in table.content.iter().enumerate() {
            let cell_tag = if table.with_headings && index == 0 {
                "th"
            } else {
                "td"
            };
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<{cell_tag}>{}</{cell_tag}>", self.clean(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        RenderedFragment::static_html(html)
    }

    /// An image without a resolvable URL produces no fragment at all,
    /// rather than a broken `<img>`.
    fn render_image(&self, image: &Image) -> Vec<RenderedFragment> {
        let Some(url) = image.url.as_deref().filter(|url| is_safe_url(url)) else {
            return Vec::new();
        };
        let caption = image.caption.as_deref().unwrap_or_default();
        let mut html = format!(
            r#"<figure><img src="{}" alt="{}">"#,
            html_escape(url.trim()),
            html_escape(caption)
        );
        let caption = self.clean_inline(caption);
        if !caption.trim().is_empty() {
            html.push_str(&format!("<figcaption>{caption}</figcaption>"));
        }
        html.push_str("</figure>");
        vec![RenderedFragment::static_html(html)]
    }

    /// Code blocks are inspected for pasted Twitter embed markup first;
    /// otherwise the content is always text-escaped, never interpreted as
    /// HTML.
    fn render_code(&self, code: &Code) -> RenderedFragment {
        if let Some(reference) = twitter_in_markup(&code.code) {
            return RenderedFragment::live_embed(reference);
        }
        let class_attr = code
            .language
            .as_deref()
            .filter(|language| !language.trim().is_empty())
            .map(|language| format!(r#" class="language-{}""#, html_escape(language.trim())))
            .unwrap_or_default();
        RenderedFragment::static_html(format!(
            "<pre><code{class_attr}>{}</code></pre>",
            html_escape(&code.code)
        ))
    }

    fn render_embed_block(
        &self,
        embed: &EmbedBlock,
        block_type: &str,
    ) -> Result<RenderedFragment, BlockRenderError> {
        let Some(url) = embed.target_url() else {
            return Err(BlockRenderError::new(block_type, "no target URL"));
        };
        let reference = classify(url);
        let caption = embed.caption.as_deref().unwrap_or_default();
        let fragment = match (reference.provider, reference.id.as_deref()) {
            (EmbedProvider::Twitter | EmbedProvider::Instagram, Some(_)) => {
                RenderedFragment::live_embed(reference)
            }
            // the iframe src is built from the extracted ID, never from the
            // caller-supplied URL
            (EmbedProvider::Youtube, Some(id)) => {
                self.iframe_fragment(&format!("https://www.youtube.com/embed/{id}"), caption)
            }
            (EmbedProvider::Vimeo, Some(id)) => {
                self.iframe_fragment(&format!("https://player.vimeo.com/video/{id}"), caption)
            }
            _ => RenderedFragment::static_html(self.render_link_preview(url, embed)),
        };
        Ok(fragment)
    }

    fn iframe_fragment(&self, src: &str, caption: &str) -> RenderedFragment {
        let mut html = format!(
            r#"<div class="embed-responsive"><iframe src="{}" frameborder="0" allowfullscreen></iframe></div>"#,
            html_escape(src)
        );
        let caption = self.clean_inline(caption);
        if !caption.trim().is_empty() {
            html.push_str(&format!(r#"<p class="embed-caption">{caption}</p>"#));
        }
        RenderedFragment::static_html(html)
    }

    fn render_link_preview(&self, url: &str, embed: &EmbedBlock) -> String {
        if !is_safe_url(url) {
            return format!("<span>{}</span>", html_escape(url));
        }
        let meta = embed.meta.as_ref();

        let mut html = String::from(r#"<div class="link-preview">"#);
        if let Some(image_url) = meta
            .and_then(|meta| meta.image_url.as_deref())
            .filter(|image_url| is_safe_url(image_url))
        {
            html.push_str(&format!(
                r#"<img src="{}" alt="">"#,
                html_escape(image_url.trim())
            ));
        }
        let label = meta
            .and_then(|meta| meta.title.as_deref())
            .map(|title| self.clean_inline(title))
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| html_escape(url));
        html.push_str(&format!(
            r#"<a href="{}">{label}</a>"#,
            html_escape(url.trim())
        ));
        if let Some(description) = meta.and_then(|meta| meta.description.as_deref()) {
            let description = self.clean_inline(description);
            if !description.trim().is_empty() {
                html.push_str(&format!("<p>{description}</p>"));
            }
        }
        html.push_str("</div>");
        html
    }

    fn render_raw(&self, raw: &Raw) -> Vec<RenderedFragment> {
        self.rich_text_fragments(&raw.html, None)
    }

    fn render_warning(&self, warning: &Warning) -> RenderedFragment {
        RenderedFragment::static_html(format!(
            r#"<div class="content-warning"><strong>{}</strong><p>{}</p></div>"#,
            self.clean_inline(&warning.title),
            self.clean(&warning.message)
        ))
    }

    /// Names the original tag for diagnosability; never echoes the
    /// unrecognized payload.
    fn render_unsupported(unsupported: &Unsupported) -> RenderedFragment {
        RenderedFragment::static_html(format!(
            r#"<div class="content-unsupported">Unsupported content type: {}</div>"#,
            html_escape(&unsupported.original_type)
        ))
    }

    /// Sanitize a rich-text field, lift bare provider links out as
    /// live-embed placeholders, and wrap the text segments in `wrap`.
    fn rich_text_fragments(&self, text: &str, wrap: Option<&str>) -> Vec<RenderedFragment> {
        let cleaned = clean_quote_entities(text);
        let segments = scan_text(&cleaned);
        let has_embeds = segments
            .iter()
            .any(|segment| matches!(segment, TextSegment::Embed(_)));

        if !has_embeds {
            return vec![RenderedFragment::static_html(wrap_html(
                &self.clean(&cleaned),
                wrap,
            ))];
        }

        let mut fragments = Vec::new();
        for segment in segments {
            match segment {
                TextSegment::Text(text) => {
                    let clean = self.clean(&text);
                    if !clean.trim().is_empty() {
                        fragments.push(RenderedFragment::static_html(wrap_html(&clean, wrap)));
                    }
                }
                TextSegment::Embed(reference) => {
                    fragments.push(RenderedFragment::live_embed(reference));
                }
            }
        }
        fragments
    }

    /// Sanitize with the configured allow-list.
    fn clean(&self, html: &str) -> String {
        match &self.options.allowed_tags {
            Some(tags) => {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                sanitize_with_tags(html, &tags)
            }
            None => sanitize(html),
        }
    }

    /// Sanitize for inline-only contexts (link labels, captions, titles):
    /// the allow-list is narrowed so no anchor or block markup can nest
    /// where it would be invalid.
    fn clean_inline(&self, html: &str) -> String {
        let allowed: Vec<&str> = match &self.options.allowed_tags {
            Some(tags) => tags
                .iter()
                .map(String::as_str)
                .filter(|tag| INLINE_TAGS.contains(tag))
                .collect(),
            None => INLINE_TAGS.to_vec(),
        };
        sanitize_with_tags(html, &allowed)
    }

    fn error_fragment() -> RenderedFragment {
        RenderedFragment::static_html(
            r#"<div class="content-block-error">An error occurred while displaying this content.</div>"#,
        )
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse quote-escaping artifacts the upstream authoring tool leaves in
/// rich-text fields. A literal quote renders the same as its entity, so
/// this is display-neutral for prose while it restores attribute values
/// that were pushed into the entity domain during repair.
fn clean_quote_entities(text: &str) -> String {
    text.replace("\\&quot;", "\"")
        .replace("&quot;", "\"")
        .replace("\\\"", "\"")
        .replace("\"\"", "\"")
}

fn wrap_html(html: &str, wrap: Option<&str>) -> String {
    match wrap {
        Some(tag) => format!("<{tag}>{html}</{tag}>"),
        None => html.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new()
    }

    fn first_html(fragments: &[RenderedFragment]) -> &str {
        fragments
            .first()
            .and_then(RenderedFragment::as_html)
            .expect("expected a static fragment")
    }

    #[test]
    fn test_render_paragraph() {
        let fragments = renderer().render_paragraph(&Paragraph {
            text: "one <b>two</b>".to_string(),
        });
        assert_eq!(first_html(&fragments), "<p>one <b>two</b></p>");
    }

    #[test]
    fn test_render_paragraph_strips_scripts() {
        let fragments = renderer().render_paragraph(&Paragraph {
            text: "x<script>alert(1)</script>".to_string(),
        });
        assert_eq!(first_html(&fragments), "<p>x</p>");
    }

    #[test]
    fn test_paragraph_lifts_inline_tweet_url() {
        let fragments = renderer().render_paragraph(&Paragraph {
            text: "watch https://twitter.com/club/status/42 now".to_string(),
        });
        assert_eq!(fragments.len(), 3);
        assert!(matches!(
            &fragments[1],
            RenderedFragment::LiveEmbed {
                provider: EmbedProvider::Twitter,
                ..
            }
        ));
    }

    #[test]
    fn test_render_header_clamps_level() {
        let r = renderer();
        let low = r.render_header(&Header {
            text: "t".to_string(),
            level: 0,
        });
        assert_eq!(low.as_html(), Some("<h1>t</h1>"));
        let high = r.render_header(&Header {
            text: "t".to_string(),
            level: 9,
        });
        assert_eq!(high.as_html(), Some("<h6>t</h6>"));
    }

    #[test]
    fn test_render_list_styles() {
        let r = renderer();
        let ordered = r
            .render_list(&List {
                style: ListStyle::Ordered,
                items: vec![
                    ListItem::Plain("one".to_string()),
                    ListItem::Rich {
                        content: "two".to_string(),
                    },
                ],
            })
            .unwrap();
        assert_eq!(
            ordered.as_html(),
            Some("<ol><li>one</li><li>two</li></ol>")
        );
    }

    #[test]
    fn test_render_list_invalid_item_fails_block() {
        let err = renderer()
            .render_list(&List {
                style: ListStyle::Unordered,
                items: vec![
                    ListItem::Plain("ok".to_string()),
                    ListItem::Invalid {
                        found: "number".to_string(),
                    },
                ],
            })
            .unwrap_err();
        assert_eq!(err.block_type, "list");
    }

    #[test]
    fn test_render_quote_with_caption() {
        let fragment = renderer().render_quote(&Quote {
            text: "we go again".to_string(),
            caption: Some("the manager".to_string()),
            alignment: None,
        });
        assert_eq!(
            fragment.as_html(),
            Some("<blockquote><p>we go again</p><cite>the manager</cite></blockquote>")
        );
    }

    #[test]
    fn test_render_table_with_headings() {
        let fragment = renderer().render_table(&Table {
            with_headings: true,
            content: vec![
                vec!["Team".to_string(), "Points".to_string()],
                vec!["Ahly".to_string(), "84".to_string()],
            ],
        });
        assert_eq!(
            fragment.as_html(),
            Some(
                "<table><tr><th>Team</th><th>Points</th></tr>\
                 <tr><td>Ahly</td><td>84</td></tr></table>"
            )
        );
    }

    #[test]
    fn test_table_cell_isolation() {
        let fragment = renderer().render_table(&Table {
            with_headings: false,
            content: vec![vec![
                "safe".to_string(),
                "<script>alert(1)</script>bad".to_string(),
                "also safe".to_string(),
            ]],
        });
        let html = fragment.as_html().unwrap();
        assert!(html.contains("<td>safe</td>"));
        assert!(html.contains("<td>bad</td>"));
        assert!(html.contains("<td>also safe</td>"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn test_render_image() {
        let fragments = renderer().render_image(&Image {
            url: Some("https://cdn.example.com/goal.jpg".to_string()),
            caption: Some("late winner".to_string()),
        });
        let html = first_html(&fragments);
        assert!(html.contains(r#"<img src="https://cdn.example.com/goal.jpg" alt="late winner">"#));
        assert!(html.contains("<figcaption>late winner</figcaption>"));
    }

    #[test]
    fn test_render_image_without_url_yields_nothing() {
        let r = renderer();
        assert!(r
            .render_image(&Image {
                url: None,
                caption: Some("orphan caption".to_string()),
            })
            .is_empty());
        assert!(r
            .render_image(&Image {
                url: Some("javascript:alert(1)".to_string()),
                caption: None,
            })
            .is_empty());
    }

    #[test]
    fn test_render_code_literal() {
        let fragment = renderer().render_code(&Code {
            code: "let x = \"<b>\";".to_string(),
            language: Some("rust".to_string()),
        });
        assert_eq!(
            fragment.as_html(),
            Some(
                "<pre><code class=\"language-rust\">let x = &quot;&lt;b&gt;&quot;;</code></pre>"
            )
        );
    }

    #[test]
    fn test_render_code_with_twitter_markup() {
        let fragment = renderer().render_code(&Code {
            code: r#"<blockquote class="twitter-tweet"><a href="https://twitter.com/club/status/5150">x</a></blockquote>"#
                .to_string(),
            language: None,
        });
        assert!(matches!(
            fragment,
            RenderedFragment::LiveEmbed {
                provider: EmbedProvider::Twitter,
                ..
            }
        ));
    }

    #[test]
    fn test_render_embed_youtube_iframe_from_id() {
        let fragment = renderer()
            .render_embed_block(
                &EmbedBlock {
                    source: Some(
                        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s\">".to_string(),
                    ),
                    ..EmbedBlock::default()
                },
                "embed",
            )
            .unwrap();
        let html = fragment.as_html().unwrap();
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(!html.contains("t=10s"));
    }

    #[test]
    fn test_render_embed_twitter_live_placeholder() {
        let fragment = renderer()
            .render_embed_block(
                &EmbedBlock {
                    link: Some("https://x.com/club/status/12345".to_string()),
                    ..EmbedBlock::default()
                },
                "embed",
            )
            .unwrap();
        let RenderedFragment::LiveEmbed {
            provider,
            id,
            canonical_url,
        } = fragment
        else {
            panic!("expected a live embed");
        };
        assert_eq!(provider, EmbedProvider::Twitter);
        assert_eq!(id.as_deref(), Some("12345"));
        assert_eq!(canonical_url, "https://twitter.com/club/status/12345");
    }

    #[test]
    fn test_render_embed_profile_url_stays_generic() {
        let fragment = renderer()
            .render_embed_block(
                &EmbedBlock {
                    link: Some("https://twitter.com/someuser".to_string()),
                    ..EmbedBlock::default()
                },
                "embed",
            )
            .unwrap();
        let html = fragment.as_html().expect("generic links render statically");
        assert!(html.contains(r#"href="https://twitter.com/someuser""#));
    }

    #[test]
    fn test_render_link_preview_uses_meta() {
        let fragment = renderer()
            .render_embed_block(
                &EmbedBlock {
                    link: Some("https://example.com/story".to_string()),
                    meta: Some(pressbox_model::LinkMeta {
                        title: Some("Big Story".to_string()),
                        description: Some("What happened".to_string()),
                        image_url: Some("https://example.com/t.jpg".to_string()),
                    }),
                    ..EmbedBlock::default()
                },
                "linkTool",
            )
            .unwrap();
        let html = fragment.as_html().unwrap();
        assert!(html.contains(r#"<img src="https://example.com/t.jpg""#));
        assert!(html.contains(">Big Story</a>"));
        assert!(html.contains("<p>What happened</p>"));
    }

    #[test]
    fn test_render_embed_without_url_fails_block() {
        let err = renderer()
            .render_embed_block(&EmbedBlock::default(), "embed")
            .unwrap_err();
        assert_eq!(err.block_type, "embed");
    }

    #[test]
    fn test_render_raw_sanitized_not_trusted() {
        let fragments = renderer().render_raw(&Raw {
            html: r#"<p onclick="x()">hello</p><iframe src="https://evil.example"></iframe>"#
                .to_string(),
        });
        assert_eq!(first_html(&fragments), "<p>hello</p>");
    }

    #[test]
    fn test_render_warning() {
        let fragment = renderer().render_warning(&Warning {
            title: "Heads up".to_string(),
            message: "lineup unconfirmed".to_string(),
        });
        assert_eq!(
            fragment.as_html(),
            Some(
                r#"<div class="content-warning"><strong>Heads up</strong><p>lineup unconfirmed</p></div>"#
            )
        );
    }

    #[test]
    fn test_render_unsupported_names_type() {
        let fragment = HtmlRenderer::render_unsupported(&Unsupported {
            original_type: "futureType".to_string(),
        });
        assert_eq!(
            fragment.as_html(),
            Some(r#"<div class="content-unsupported">Unsupported content type: futureType</div>"#)
        );
    }

    #[test]
    fn test_render_document_contains_block_failure() {
        let mut doc = Document::new();
        doc.push(Block::Paragraph(Paragraph {
            text: "before".to_string(),
        }));
        doc.push(Block::List(List {
            style: ListStyle::Unordered,
            items: vec![ListItem::Invalid {
                found: "number".to_string(),
            }],
        }));
        doc.push(Block::Paragraph(Paragraph {
            text: "after".to_string(),
        }));

        let fragments = renderer().render_document(&doc);
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].as_html(), Some("<p>before</p>"));
        assert!(fragments[1]
            .as_html()
            .unwrap()
            .contains("content-block-error"));
        assert_eq!(fragments[2].as_html(), Some("<p>after</p>"));
    }

    #[test]
    fn test_clean_quote_entities() {
        assert_eq!(
            clean_quote_entities(r#"<a href="\&quot;https://e.com\&quot;">x</a>"#),
            r#"<a href="https://e.com">x</a>"#
        );
        assert_eq!(clean_quote_entities("He said &quot;go&quot;"), r#"He said "go""#);
    }

    #[test]
    fn test_narrowed_options_respected() {
        let r = HtmlRenderer::with_options(RenderOptions {
            allowed_tags: Some(vec!["p".to_string()]),
            ..RenderOptions::default()
        });
        let fragments = r.render_paragraph(&Paragraph {
            text: "a <b>b</b>".to_string(),
        });
        assert_eq!(first_html(&fragments), "<p>a b</p>");
    }
}
