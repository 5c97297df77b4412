//! Rendering the replacement relatedImages block

use relimg_manifest::RelatedImage;

use crate::error::Result;
use crate::state::{EMPTY_KEY, KEY};

/// One indentation unit: the block sits one level under the top-level
/// `spec:` key, and the manifest convention is 2-space nesting.
const INDENT: &str = "  ";

/// Render `entries` as the complete relatedImages block, key line included.
///
/// The serializer emits the list relative to column zero, so every line is
/// shifted right by one indent unit afterwards, and the serializer's
/// trailing newline is dropped so no blank line leaks into the document.
/// An empty entry list renders the explicit empty marker rather than
/// omitting the key, keeping the result distinguishable from a document
/// that never had the block.
pub fn render_block(entries: &[RelatedImage]) -> Result<String> {
    if entries.is_empty() {
        return Ok(format!("{INDENT}{EMPTY_KEY}"));
    }

    let body = serde_yaml::to_string(entries)?;
    let block = format!("{KEY}\n{body}");

    let indented: Vec<String> = block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect();

    Ok(indented.join("\n"))
}
