//! Error types for relimg-edit

/// Result type for relimg-edit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing a manifest in place
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The populated relatedImages span could not be located.
    #[error("could not locate the relatedImages block in the manifest")]
    BlockNotFound,

    /// The replacement entries failed to serialize.
    #[error("failed to render relatedImages entries: {0}")]
    Render(#[from] serde_yaml::Error),
}
