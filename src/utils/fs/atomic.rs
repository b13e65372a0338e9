//! Atomic file writes using a temp-and-rename strategy.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::utils::fs::dirs::ensure_dir;
use crate::utils::platform::{is_windows, windows_long_path};

/// Atomically write `content` to `path`.
///
/// The bytes go to a sibling temporary file which is synced and then renamed
/// over the target, so readers (a web server, for instance) see either the old
/// file or the new one, never a partial write. Parent directories are created
/// as needed.
///
/// # Errors
///
/// Fails when the directory cannot be created or any write step fails. The
/// temporary file is cleaned up on failure.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let safe_path = windows_long_path(path);

    let parent = match safe_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    ensure_dir(&parent)?;

    let mut temp = tempfile::Builder::new()
        .prefix(".vendor-harden-")
        .suffix(".tmp")
        .tempfile_in(&parent)
        .with_context(|| {
            let platform_help = if is_windows() {
                "On Windows: Check file permissions, path length, and that directory exists"
            } else {
                "Check file permissions and that directory exists"
            };

            format!("Failed to create temp file in: {}\n\n{}", parent.display(), platform_help)
        })?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(&safe_path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", safe_path.display()))?;

    // Temp files are created 0600; published files should be world-readable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&safe_path, fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions on {}", safe_path.display()))?;
    }

    Ok(())
}
