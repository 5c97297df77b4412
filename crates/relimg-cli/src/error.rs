//! Error types for relimg-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from relimg-manifest
    #[error(transparent)]
    Manifest(#[from] relimg_manifest::Error),

    /// Error from relimg-edit
    #[error(transparent)]
    Edit(#[from] relimg_edit::Error),

    /// Error from relimg-fs
    #[error(transparent)]
    Fs(#[from] relimg_fs::Error),
}
