//! pressbox-model - Block-document data model
//!
//! This crate provides the types shared across the pressbox content engine:
//! the decoded [`Document`] and its [`Block`] variants, plus the derived
//! [`EmbedReference`] and [`RenderedFragment`] structures produced while
//! rendering.
//!
//! Types that cross the JSON boundary toward the host UI derive
//! `serde::Serialize`. Decoding the authoring tool's JSON is deliberately
//! not derived: the raw documents are too irregular for a derive to be
//! fault-tolerant, so the engine crate maps `serde_json::Value` into these
//! types by hand.

pub mod block;
pub mod document;
pub mod embed;
pub mod fragment;

pub use block::{
    Block, Code, EmbedBlock, Header, Image, LinkMeta, List, ListItem, ListStyle, Paragraph, Quote,
    Raw, Table, Unsupported, Warning,
};
pub use document::Document;
pub use embed::{EmbedProvider, EmbedReference};
pub use fragment::RenderedFragment;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
