//! Typed ClusterServiceVersion subset and related-image collection
//!
//! Decodes only the manifest fields the pinning tool actually reads, all of
//! them defaulted so hand-authored manifests with unrelated fields decode
//! cleanly.

pub mod csv;
pub mod error;
pub mod image;

pub use csv::ClusterServiceVersion;
pub use error::{Error, Result};
pub use image::{RelatedImage, collect_related_images, short_name};
