//! Platform-specific path handling.
//!
//! Vendor trees nest deeply (`vendor/<vendor>/<name>/tests/Fixtures/...`), which
//! routinely crosses the 260 character limit of legacy Windows APIs. Every
//! filesystem call in [`crate::utils::fs`] goes through [`windows_long_path`]
//! first.

use std::path::{Path, PathBuf};

/// Whether the current platform is Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Convert `path` to its extended-length (`\\?\`) form when it exceeds the
/// Windows `MAX_PATH` limit.
///
/// - Local paths: `C:\path` becomes `\\?\C:\path`
/// - Network paths: `\\server\share` becomes `\\?\UNC\server\share`
/// - Already prefixed paths and short paths are returned unchanged
#[cfg(windows)]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str.len() <= 260 || path_str.starts_with(r"\\?\") {
        return path.to_path_buf();
    }

    let absolute_path = if path.is_relative() {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(path)
    } else {
        path.to_path_buf()
    };

    let absolute_str = absolute_path.to_string_lossy();
    if absolute_str.len() <= 260 {
        return absolute_path;
    }

    if let Some(stripped) = absolute_str.strip_prefix(r"\\") {
        PathBuf::from(format!(r"\\?\UNC\{stripped}"))
    } else {
        PathBuf::from(format!(r"\\?\{absolute_str}"))
    }
}

/// No-op on platforms without a path length limit.
#[cfg(not(windows))]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}
