//! Lenient serde model of the ClusterServiceVersion fields the tool reads

use serde::Deserialize;

use crate::Result;
use crate::image::RelatedImage;

/// The subset of a ClusterServiceVersion this tool reads.
///
/// Every field is defaulted, so a manifest missing any of them still
/// decodes, and fields outside the subset are ignored entirely. This is a
/// reader model, not a validator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterServiceVersion {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: CsvSpec,
}

impl ClusterServiceVersion {
    /// Decode a manifest from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

/// Object metadata; only the name is read, for diagnostics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvSpec {
    #[serde(default)]
    pub install: InstallStrategy,
    #[serde(default)]
    pub related_images: Vec<RelatedImage>,
}

/// The named install strategy and its deployment details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstallStrategy {
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub spec: StrategyDetailsDeployment,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrategyDetailsDeployment {
    #[serde(default)]
    pub deployments: Vec<StrategyDeploymentSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrategyDeploymentSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spec: DeploymentSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentSpec {
    #[serde(default)]
    pub template: PodTemplateSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodTemplateSpec {
    #[serde(default)]
    pub spec: PodSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
}

/// A single container entry; only name and image are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}
