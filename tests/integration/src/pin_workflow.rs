//! End-to-end pinning workflow against the test-fixtures manifest
//!
//! Drives both the library pipeline (decode, collect, replace) and the
//! relimg binary against a realistic hand-authored ClusterServiceVersion,
//! checking that only the relatedImages block changes.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use relimg_edit::replace;
use relimg_fs::write_atomic;
use relimg_manifest::{ClusterServiceVersion, collect_related_images};

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn load_fixture() -> String {
    let path = fixtures_dir().join("csv/memcached-operator.clusterserviceversion.yaml");
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture at {}: {}", path.display(), e))
}

#[test]
fn library_pipeline_pins_the_fixture() {
    let original = load_fixture();
    let csv = ClusterServiceVersion::from_yaml(&original).unwrap();
    let entries = collect_related_images(&csv);

    // Two containers, name-sorted.
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["kube-rbac-proxy", "memcached-operator"]);

    let updated = replace(&original, &entries).unwrap();

    // The block replaced the empty marker; its comment and siblings stayed.
    assert!(updated.contains(
        "  # relatedImages is managed by tooling; do not edit by hand.\n  relatedImages:\n"
    ));
    assert!(!updated.contains("relatedImages: []"));
    assert!(updated.contains("\n  maintainers:\n"));
    assert!(updated.starts_with("# Maintained by the operator team"));

    // Everything the typed model sees, apart from relatedImages, is as before.
    let reparsed = ClusterServiceVersion::from_yaml(&updated).unwrap();
    assert_eq!(reparsed.metadata.name, csv.metadata.name);
    assert_eq!(
        reparsed.spec.install.spec.deployments.len(),
        csv.spec.install.spec.deployments.len()
    );
    assert_eq!(reparsed.spec.related_images, entries);

    // The untyped view agrees: exactly the collected entries, nothing else.
    let value: serde_yaml::Value = serde_yaml::from_str(&updated).unwrap();
    let rendered = value["spec"]["relatedImages"].as_sequence().unwrap();
    assert_eq!(rendered.len(), entries.len());
}

#[test]
fn repeated_library_runs_converge() {
    let original = load_fixture();
    let csv = ClusterServiceVersion::from_yaml(&original).unwrap();
    let entries = collect_related_images(&csv);

    let once = replace(&original, &entries).unwrap();

    // A second pass over the already-pinned document collects the same
    // entries and rewrites the block like-for-like.
    let csv_again = ClusterServiceVersion::from_yaml(&once).unwrap();
    let entries_again = collect_related_images(&csv_again);
    assert_eq!(entries_again, entries);

    let twice = replace(&once, &entries_again).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn binary_pins_a_fixture_copy_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("memcached-operator.clusterserviceversion.yaml");
    write_atomic(&path, load_fixture().as_bytes()).unwrap();

    Command::cargo_bin("relimg")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pinned 2 related images"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("  - name: kube-rbac-proxy\n"));
    assert!(content.contains("  - name: memcached-operator\n"));

    // Untouched regions are byte-identical: everything before the block's
    // line range and everything from the trailing sibling onward.
    let original = load_fixture();
    let block_start = original.find("  relatedImages: []").unwrap();
    let sibling_start = original.find("  maintainers:").unwrap();
    assert!(content.starts_with(&original[..block_start]));
    assert!(content.ends_with(&original[sibling_start..]));
}

#[test]
fn binary_dry_run_only_previews() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("csv.yaml");
    let original = load_fixture();
    fs::write(&path, &original).unwrap();

    Command::cargo_bin("relimg")
        .unwrap()
        .arg("--dry-run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("+  - name: kube-rbac-proxy"));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
