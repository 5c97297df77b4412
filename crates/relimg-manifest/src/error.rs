//! Error types for relimg-manifest

/// Result type for relimg-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in relimg-manifest operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to decode ClusterServiceVersion: {0}")]
    Decode(#[from] serde_yaml::Error),
}
