//! Path removal that never aborts a batch.
//!
//! [`remove_path`] turns every filesystem failure into a [`RemovalOutcome`]
//! value. Callers iterate over many paths and many packages; one unremovable
//! directory must not stop the rest.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use crate::utils::platform::{is_windows, windows_long_path};

/// Result of trying to remove one configured path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The path existed and is now gone.
    Removed,
    /// Nothing existed at the path. Expected for dist installs that never ship
    /// the directory.
    AlreadyAbsent,
    /// The path exists but could not be (fully) deleted. Whatever partial state
    /// resulted is left on disk.
    Failed {
        /// Error text from the operating system
        reason: String,
    },
    /// The path holds one of the package's declared binaries and was left alone.
    Retained,
}

impl RemovalOutcome {
    /// Short lowercase label for status output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Removed => "removed",
            Self::AlreadyAbsent => "already absent",
            Self::Failed {
                ..
            } => "failed",
            Self::Retained => "retained",
        }
    }

    /// Whether the outcome is a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for RemovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed {
                reason,
            } => write!(f, "failed: {reason}"),
            other => f.write_str(other.label()),
        }
    }
}

/// Recursively delete `path`.
///
/// Directories are removed with their contents; files and symlinks are
/// unlinked. Symlinks are never followed, so a link pointing outside the vendor
/// tree only loses the link itself. There is no retry and no rollback.
pub async fn remove_path(path: &Path) -> RemovalOutcome {
    let safe_path = windows_long_path(path);

    let metadata = match tokio::fs::symlink_metadata(&safe_path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::trace!("{} does not exist", path.display());
            return RemovalOutcome::AlreadyAbsent;
        }
        Err(e) => {
            return RemovalOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    let file_type = metadata.file_type();
    let result = if file_type.is_dir() {
        tokio::fs::remove_dir_all(&safe_path).await
    } else {
        match tokio::fs::remove_file(&safe_path).await {
            // Directory symlinks and junctions on Windows need remove_dir
            Err(_) if is_windows() && file_type.is_symlink() => {
                tokio::fs::remove_dir(&safe_path).await
            }
            other => other,
        }
    };

    match result {
        Ok(()) => {
            tracing::debug!("Removed {}", path.display());
            RemovalOutcome::Removed
        }
        // Something else deleted it between the stat and the removal
        Err(e) if e.kind() == ErrorKind::NotFound => RemovalOutcome::AlreadyAbsent,
        Err(e) => {
            tracing::debug!("Failed to remove {}: {}", path.display(), e);
            RemovalOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
