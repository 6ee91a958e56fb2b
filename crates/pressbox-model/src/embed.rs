//! Embed references derived from provider URLs
//!
//! An [`EmbedReference`] is transient: the resolver creates one while
//! rendering `embed`/`linkTool` blocks or while scanning free text for bare
//! provider URLs. Nothing persists it.

use serde::Serialize;

/// Third-party media provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedProvider {
    Twitter,
    Instagram,
    Youtube,
    Vimeo,
    /// Anything else with a resolvable absolute URL
    Generic,
}

impl EmbedProvider {
    /// Lowercase provider name, as used in placeholder markup and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedProvider::Twitter => "twitter",
            EmbedProvider::Instagram => "instagram",
            EmbedProvider::Youtube => "youtube",
            EmbedProvider::Vimeo => "vimeo",
            EmbedProvider::Generic => "generic",
        }
    }
}

impl std::fmt::Display for EmbedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified provider URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedReference {
    /// Detected provider, `Generic` when no provider pattern matched
    pub provider: EmbedProvider,
    /// Extracted media ID; always present for non-generic providers
    pub id: Option<String>,
    /// Canonical URL for the reference (`x.com` hosts are rewritten to
    /// `twitter.com`, which is what the embed widget script recognizes)
    pub canonical_url: String,
}

impl EmbedReference {
    /// A generic reference around an unclassified URL.
    pub fn generic(url: impl Into<String>) -> Self {
        Self {
            provider: EmbedProvider::Generic,
            id: None,
            canonical_url: url.into(),
        }
    }
}
