//! Block-state detection for the relatedImages section

/// The target key token, with its trailing colon.
pub(crate) const KEY: &str = "relatedImages:";

/// The explicit empty-collection form of the target key.
pub(crate) const EMPTY_KEY: &str = "relatedImages: []";

/// Structural state of the relatedImages block in a raw manifest.
///
/// Exactly one variant holds for any document: a missing key cannot also
/// match the empty marker (the marker contains the key), and the marker
/// takes precedence over treating the block as populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// The key does not occur anywhere in the document.
    Missing,
    /// The key occurs with an explicit empty list (`relatedImages: []`).
    EmptyMarker,
    /// The key occurs with at least one rendered entry.
    Populated,
}

/// Classify the current state of the relatedImages block.
///
/// A plain substring scan over the document text. Absence of the key is an
/// expected state, not an error, and no structural validation happens here.
pub fn classify(source: &str) -> BlockState {
    if !source.contains(KEY) {
        BlockState::Missing
    } else if source.contains(EMPTY_KEY) {
        BlockState::EmptyMarker
    } else {
        BlockState::Populated
    }
}
