//! Disk usage of configured cleanup paths.

use std::path::Path;
use walkdir::WalkDir;

/// Total size in bytes of the files under `path`, or `None` if nothing exists
/// there.
///
/// Symlinks are not followed and count as zero. Entries that cannot be read
/// are skipped; this feeds a read-only report, not a decision.
#[must_use]
pub fn disk_usage(path: &Path) -> Option<u64> {
    let metadata = std::fs::symlink_metadata(path).ok()?;
    if !metadata.is_dir() {
        return Some(if metadata.is_file() { metadata.len() } else { 0 });
    }

    let total = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum();

    Some(total)
}

/// Format a byte count for humans (`512 B`, `1.5 KiB`, `3.0 MiB`).
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}
