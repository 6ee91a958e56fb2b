//! Typed errors of the content engine
//!
//! Only [`ContentFormatError`] ever crosses the public boundary. Individual
//! block failures are contained by the renderer and surface as inline error
//! fragments, never as returned errors.

use thiserror::Error;

/// The raw content string could not be turned into a block document.
///
/// Callers treat this as a terminal failure for the whole document and
/// render a fixed "content unavailable" fallback in its place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentFormatError {
    /// The string did not parse as JSON even after every repair pass.
    #[error("content is not valid JSON after repair: {0}")]
    UnparsableJson(String),

    /// The JSON parsed but the envelope carries no `blocks` sequence.
    #[error("decoded content has no blocks sequence")]
    MissingBlocks,
}

/// A single block failed to render.
///
/// Caught inside the renderer; the document still renders with the failing
/// block replaced by an inline error placeholder.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to render `{block_type}` block: {reason}")]
pub struct BlockRenderError {
    /// Tag of the failing block
    pub block_type: String,
    /// Human-readable failure reason, for logs
    pub reason: String,
}

impl BlockRenderError {
    pub fn new(block_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            reason: reason.into(),
        }
    }
}
