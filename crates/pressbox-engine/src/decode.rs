//! Decoding repaired JSON into the typed block model
//!
//! Decode is strict about the envelope (a `blocks` array must exist) and
//! fault-tolerant about individual elements: an unknown tag or a
//! structurally broken element becomes an [`Unsupported`] block carrying its
//! original tag, instead of aborting the whole document.

use serde_json::Value;

use pressbox_model::{
    Block, Code, Document, EmbedBlock, Header, Image, LinkMeta, List, ListItem, ListStyle,
    Paragraph, Quote, Raw, Table, Unsupported, Warning,
};

use crate::error::ContentFormatError;
use crate::repair::repair;

/// Parse a raw (possibly corrupted) content string into a [`Document`].
///
/// Runs the repair passes first, then maps each element of the `blocks`
/// array onto a block variant. Fails only when the string cannot be made to
/// parse or when the parsed JSON has no `blocks` sequence at all.
pub fn decode(raw: &str) -> Result<Document, ContentFormatError> {
    let repaired = repair(raw)?;
    let value: Value = serde_json::from_str(&repaired)
        .map_err(|err| ContentFormatError::UnparsableJson(err.to_string()))?;

    let envelope = value.as_object().ok_or(ContentFormatError::MissingBlocks)?;
    let blocks = envelope
        .get("blocks")
        .and_then(Value::as_array)
        .ok_or(ContentFormatError::MissingBlocks)?;

    Ok(Document {
        version: str_field(&value, "version"),
        // `createdAt` on current documents, `time` on ones written by older
        // authoring tool versions
        created_at: envelope
            .get("createdAt")
            .or_else(|| envelope.get("time"))
            .and_then(Value::as_i64),
        blocks: blocks.iter().map(decode_block).collect(),
    })
}

/// Map one element of the `blocks` array onto a block variant.
fn decode_block(value: &Value) -> Block {
    let Some(block_type) = value.get("type").and_then(Value::as_str) else {
        return Block::Unsupported(Unsupported {
            original_type: json_type_name(value).to_string(),
        });
    };

    let empty = Value::Object(serde_json::Map::new());
    let data = value.get("data").unwrap_or(&empty);

    match block_type {
        "paragraph" => Block::Paragraph(Paragraph {
            text: str_field(data, "text").unwrap_or_default(),
        }),
        "header" | "heading" => Block::Header(Header {
            text: str_field(data, "text").unwrap_or_default(),
            level: data.get("level").and_then(Value::as_i64).unwrap_or(2),
        }),
        "list" => Block::List(decode_list(data)),
        "quote" => Block::Quote(Quote {
            text: str_field(data, "text").unwrap_or_default(),
            caption: str_field(data, "caption"),
            alignment: str_field(data, "alignment"),
        }),
        "table" => Block::Table(decode_table(data)),
        "image" => Block::Image(Image {
            // `file.url` wins over the flat `url` field when both are present
            url: data
                .get("file")
                .and_then(|file| file.get("url"))
                .and_then(Value::as_str)
                .or_else(|| data.get("url").and_then(Value::as_str))
                .map(str::to_string),
            caption: str_field(data, "caption"),
        }),
        "code" => Block::Code(Code {
            code: str_field(data, "code").unwrap_or_default(),
            language: str_field(data, "language"),
        }),
        "delimiter" => Block::Delimiter,
        "embed" => Block::Embed(decode_embed(data)),
        "linkTool" => Block::LinkTool(decode_embed(data)),
        "raw" => Block::Raw(Raw {
            html: str_field(data, "html").unwrap_or_default(),
        }),
        "warning" => Block::Warning(Warning {
            title: str_field(data, "title").unwrap_or_default(),
            message: str_field(data, "message").unwrap_or_default(),
        }),
        other => Block::Unsupported(Unsupported {
            original_type: other.to_string(),
        }),
    }
}

fn decode_list(data: &Value) -> List {
    let style = match data.get("style").and_then(Value::as_str) {
        Some("ordered") => ListStyle::Ordered,
        _ => ListStyle::Unordered,
    };
    let items = data
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(decode_list_item).collect())
        .unwrap_or_default();
    List { style, items }
}

fn decode_list_item(item: &Value) -> ListItem {
    if let Some(text) = item.as_str() {
        return ListItem::Plain(text.to_string());
    }
    // nested-list objects expose their own text under `content`
    if let Some(content) = item.get("content").and_then(Value::as_str) {
        return ListItem::Rich {
            content: content.to_string(),
        };
    }
    ListItem::Invalid {
        found: json_type_name(item).to_string(),
    }
}

fn decode_table(data: &Value) -> Table {
    let with_headings = data
        .get("withHeadings")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let content = data
        .get("content")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    row.as_array()
                        .map(|cells| {
                            cells
                                .iter()
                                .map(|cell| cell.as_str().unwrap_or_default().to_string())
                                .collect()
                        })
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_default();
    Table {
        with_headings,
        content,
    }
}

fn decode_embed(data: &Value) -> EmbedBlock {
    let meta = data.get("meta").and_then(Value::as_object).map(|meta| {
        LinkMeta {
            title: meta.get("title").and_then(Value::as_str).map(str::to_string),
            description: meta
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            image_url: meta
                .get("image")
                .and_then(|image| image.get("url"))
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    });
    EmbedBlock {
        link: str_field(data, "link"),
        url: str_field(data, "url"),
        source: str_field(data, "source"),
        embed: str_field(data, "embed"),
        caption: str_field(data, "caption"),
        meta,
    }
}

fn str_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
