//! Related-image entries and collection from deployment specs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::csv::ClusterServiceVersion;

/// A single entry in `spec.relatedImages`: a short name keying a pinned
/// image reference. Field order is fixed (name, then image) and matches the
/// rendered block layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedImage {
    pub name: String,
    pub image: String,
}

impl RelatedImage {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// Derive the deduplication key for an image reference.
///
/// Takes the final path segment with any digest or tag suffix removed, so
/// `quay.io/example/memcached-operator@sha256:...` keys as
/// `memcached-operator`. Not a full reference parser; it only has to
/// produce a stable short key.
pub fn short_name(image: &str) -> String {
    let repository = image.split('@').next().unwrap_or(image);
    let segment = repository.rsplit('/').next().unwrap_or(repository);
    let name = segment.split(':').next().unwrap_or(segment);
    name.to_string()
}

/// Collect every container image in the CSV's deployment specs and merge
/// them with the existing `spec.relatedImages` entries.
///
/// Entries are keyed by name; a freshly collected container image replaces
/// an existing entry with the same key. The result is name-sorted so
/// repeated runs produce identical documents.
pub fn collect_related_images(csv: &ClusterServiceVersion) -> Vec<RelatedImage> {
    let mut by_name: BTreeMap<String, String> = csv
        .spec
        .related_images
        .iter()
        .map(|entry| (entry.name.clone(), entry.image.clone()))
        .collect();

    for deployment in &csv.spec.install.spec.deployments {
        for container in &deployment.spec.template.spec.containers {
            if container.image.is_empty() {
                continue;
            }
            by_name.insert(short_name(&container.image), container.image.clone());
        }
    }

    by_name
        .into_iter()
        .map(|(name, image)| RelatedImage { name, image })
        .collect()
}
