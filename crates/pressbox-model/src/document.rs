//! Document root and envelope metadata
//!
//! This module defines the top-level decoded unit: an ordered sequence of
//! blocks plus the informational envelope fields written by the authoring
//! tool.

use serde::Serialize;

use crate::block::Block;

/// A decoded block document.
///
/// `version` and `created_at` are carried straight from the envelope and are
/// informational only. `blocks` is the rendering order and is significant;
/// after a successful decode it is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Authoring tool version string
    pub version: Option<String>,
    /// Creation timestamp (milliseconds since the epoch)
    pub created_at: Option<i64>,
    /// Document content blocks, in rendering order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document is empty (no blocks)
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}
