//! Cross-platform utilities
//!
//! # Modules
//!
//! - [`fs`] - Path removal, atomic writes and disk usage
//! - [`platform`] - Platform-specific path handling

pub mod fs;
pub mod platform;

pub use fs::{RemovalOutcome, atomic_write, ensure_dir, remove_path};
pub use platform::is_windows;
