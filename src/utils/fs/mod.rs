//! File system utilities
//!
//! Everything here goes through [`crate::utils::platform::windows_long_path`]
//! so deep vendor trees work on Windows too.
//!
//! - [`remove_path`] deletes one path and reports a [`RemovalOutcome`] instead of
//!   failing, so a batch of removals always runs to the end
//! - [`atomic_write`] publishes a file with temp-and-rename
//! - [`disk_usage`] sums file sizes under a path for reporting

pub mod atomic;
pub mod dirs;
pub mod metadata;
pub mod remove;

pub use atomic::atomic_write;
pub use dirs::ensure_dir;
pub use metadata::{disk_usage, format_size};
pub use remove::{RemovalOutcome, remove_path};
