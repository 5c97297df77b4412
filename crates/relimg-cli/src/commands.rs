//! The pin operation: collect deployment images and rewrite relatedImages

use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use relimg_edit::replace;
use relimg_fs::{read_text, write_atomic};
use relimg_manifest::{ClusterServiceVersion, collect_related_images};

use crate::error::Result;

/// Pin the manifest at `path` in place.
///
/// Reads and decodes the manifest, merges its deployment container images
/// into the related-images entries, and splices the rebuilt block into the
/// original text. With `dry_run` the result is shown as a unified diff and
/// the file is left untouched.
pub fn run_pin(path: &Path, dry_run: bool) -> Result<()> {
    let original = read_text(path)?;
    let csv = ClusterServiceVersion::from_yaml(&original)?;

    if let Some(name) = &csv.metadata.name {
        debug!("decoded ClusterServiceVersion {name}");
    }

    let entries = collect_related_images(&csv);
    debug!("collected {} related image entries", entries.len());

    let updated = replace(&original, &entries)?;

    if dry_run {
        print_diff(&original, &updated);
        return Ok(());
    }

    write_atomic(path, updated.as_bytes())?;

    println!(
        "{} Pinned {} related image{} in {}",
        "OK".green().bold(),
        entries.len(),
        if entries.len() == 1 { "" } else { "s" },
        path.display().to_string().cyan()
    );

    Ok(())
}

/// Print a line diff of the would-be rewrite.
fn print_diff(original: &str, updated: &str) {
    if original == updated {
        println!("{} No changes.", "OK".green().bold());
        return;
    }

    let diff = TextDiff::from_lines(original, updated);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", format!("-{change}").red()),
            ChangeTag::Insert => print!("{}", format!("+{change}").green()),
            ChangeTag::Equal => print!(" {change}"),
        }
    }
}
