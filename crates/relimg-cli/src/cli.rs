//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Pin deployment container images into spec.relatedImages
///
/// Reads a ClusterServiceVersion manifest, collects the container images of
/// its deployment specs, and rewrites the relatedImages block in place
/// without disturbing the rest of the hand-authored file. Images are
/// expected to already be pinned to a digest.
///
/// Examples:
///   relimg bundle/manifests/operator.clusterserviceversion.yaml
///   relimg --dry-run operator.clusterserviceversion.yaml
#[derive(Parser, Debug)]
#[command(name = "relimg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the ClusterServiceVersion manifest to modify
    pub manifest: PathBuf,

    /// Preview the rewrite as a unified diff without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
