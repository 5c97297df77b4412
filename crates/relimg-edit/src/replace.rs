//! Block replacement: plan construction and the three splice strategies

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use relimg_manifest::RelatedImage;

use crate::error::{Error, Result};
use crate::render::render_block;
use crate::state::{BlockState, classify};

/// A line that is exactly the top-level `spec:` key at column zero.
static PARENT_KEY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^spec:$").unwrap());

/// The empty-marker line at exactly one level of nesting. `.` stops at the
/// line end, so the whole marker line is the match.
static EMPTY_MARKER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  relatedImages: \[\].*$").unwrap());

/// The populated block: the key line at one level of nesting through every
/// following line, up to but not including the next sibling key of `spec`
/// (a two-space-indented line starting with a lowercase key character).
/// Group 1 is the block span; the sibling-line match is discarded. `U`
/// makes the repetition lazy so the span ends at the first sibling.
static POPULATED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?msU)(^  relatedImages:.+)\n(^  [a-z])").unwrap());

/// An immutable replacement plan: the classified block state plus the
/// rendered replacement text, computed once and consumed by exactly one
/// splice strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacePlan {
    state: BlockState,
    rendered: String,
}

impl ReplacePlan {
    /// Classify `source` and render `entries` into a plan.
    pub fn prepare(source: &str, entries: &[RelatedImage]) -> Result<Self> {
        Ok(Self {
            state: classify(source),
            rendered: render_block(entries)?,
        })
    }

    /// The classified state this plan dispatches on.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Apply the plan to `source`, producing the complete new document.
    ///
    /// Every strategy splices the rendered block into the byte range it
    /// located, never by value search-and-replace, so content duplicated
    /// elsewhere in the document cannot be touched by mistake.
    pub fn apply(&self, source: &str) -> Result<String> {
        match self.state {
            BlockState::Missing => Ok(self.insert_after_parent(source)),
            BlockState::EmptyMarker => Ok(self.replace_empty_marker(source)),
            BlockState::Populated => self.replace_existing_block(source),
        }
    }

    /// Missing-block strategy: insert the rendered block immediately after
    /// the first top-level `spec:` line. A document without that line
    /// passes through unchanged; validating overall manifest shape is the
    /// caller's job, not this component's.
    fn insert_after_parent(&self, source: &str) -> String {
        match PARENT_KEY_LINE.find(source) {
            Some(parent) => splice(
                source,
                parent.end()..parent.end(),
                &format!("\n{}", self.rendered),
            ),
            None => source.to_string(),
        }
    }

    /// Empty-marker strategy: replace the whole `relatedImages: []` line
    /// with the rendered block. An unmatched marker (wrong indentation)
    /// also passes through unchanged.
    fn replace_empty_marker(&self, source: &str) -> String {
        match EMPTY_MARKER_LINE.find(source) {
            Some(marker) => splice(source, marker.range(), &self.rendered),
            None => source.to_string(),
        }
    }

    /// Existing-block strategy: replace the span from the key line through
    /// the last entry line with the rendered block, leaving the sibling key
    /// line and everything after it untouched.
    fn replace_existing_block(&self, source: &str) -> Result<String> {
        let captures = POPULATED_BLOCK.captures(source).ok_or(Error::BlockNotFound)?;
        let span = captures.get(1).ok_or(Error::BlockNotFound)?.range();
        Ok(splice(source, span, &self.rendered))
    }
}

/// Replace the relatedImages block of `source` with `entries`.
///
/// Classifies the current block state, renders the replacement once, and
/// dispatches to exactly one splice strategy. Returns the complete new
/// document, or `Error::BlockNotFound` if a populated block could not be
/// located. The input is never partially rewritten: the result is either a
/// whole new document or an error.
pub fn replace(source: &str, entries: &[RelatedImage]) -> Result<String> {
    ReplacePlan::prepare(source, entries)?.apply(source)
}

/// Splice `replacement` into exactly the byte range `span` of `source`.
fn splice(source: &str, span: Range<usize>, replacement: &str) -> String {
    let mut result = String::with_capacity(source.len() - span.len() + replacement.len());
    result.push_str(&source[..span.start]);
    result.push_str(replacement);
    result.push_str(&source[span.end..]);
    result
}
