//! Rendered output fragments
//!
//! Rendering a document yields a flat sequence of fragments. Most are
//! sanitized HTML strings; Twitter and Instagram embeds need client-side
//! widget scripts to finish rendering, so those come out as typed
//! placeholders and the host UI decides how and when to mount them.

use serde::Serialize;

use crate::embed::{EmbedProvider, EmbedReference};

/// One unit of rendered output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderedFragment {
    /// Sanitized HTML, safe to interpolate into the page as-is
    StaticHtml { html: String },
    /// A live widget the host must mount (provider script execution required)
    #[serde(rename_all = "camelCase")]
    LiveEmbed {
        provider: EmbedProvider,
        id: Option<String>,
        canonical_url: String,
    },
}

impl RenderedFragment {
    /// A static HTML fragment.
    pub fn static_html(html: impl Into<String>) -> Self {
        RenderedFragment::StaticHtml { html: html.into() }
    }

    /// A live-embed placeholder built from a resolved reference.
    pub fn live_embed(reference: EmbedReference) -> Self {
        RenderedFragment::LiveEmbed {
            provider: reference.provider,
            id: reference.id,
            canonical_url: reference.canonical_url,
        }
    }

    /// The HTML of a static fragment, `None` for live embeds.
    pub fn as_html(&self) -> Option<&str> {
        match self {
            RenderedFragment::StaticHtml { html } => Some(html),
            RenderedFragment::LiveEmbed { .. } => None,
        }
    }
}
