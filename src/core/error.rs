//! Error handling for vendor-harden
//!
//! This module provides the error types and user-friendly error reporting for the
//! vendor hardening hook. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`HardenError`] - Enumerated error types for systemic failures
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # What is *not* an error
//!
//! Per-path problems during cleanup (a directory that is already gone, a directory
//! that could not be deleted) are values, see
//! [`RemovalOutcome`](crate::utils::fs::RemovalOutcome). They are reported and the
//! batch continues. Only failures with no safe partial result surface here:
//! an unreadable package registry, an invalid configuration file, an unknown
//! lifecycle event.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vendor_harden_cli::core::{HardenError, ErrorContext, user_friendly_error};
//!
//! let error = HardenError::RegistryUnavailable {
//!     path: "vendor/composer/installed.json".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for vendor-harden operations
///
/// Each variant carries enough context (file paths, package names, event names)
/// to be displayed to the user without further decoration.
///
/// # Error Categories
///
/// ## Configuration
/// - [`ConfigError`] - Generic configuration problem
/// - [`ConfigParseError`] - Configuration file has invalid syntax or unknown keys
/// - [`InvalidCleanupPath`] - A configured path would escape the package directory
///
/// ## Package Registry
/// - [`RegistryUnavailable`] - `installed.json` is missing or unreadable
/// - [`RegistryParseError`] - `installed.json` is not a valid Composer repository
///
/// ## Lifecycle Events
/// - [`UnknownEvent`] - Event name is not one of the supported hooks
/// - [`MissingEventPackage`] - A per-package event was fired without a package
///
/// ## File System
/// - [`FileSystemError`], [`PermissionDenied`], [`IoError`]
///
/// [`ConfigError`]: HardenError::ConfigError
/// [`ConfigParseError`]: HardenError::ConfigParseError
/// [`InvalidCleanupPath`]: HardenError::InvalidCleanupPath
/// [`RegistryUnavailable`]: HardenError::RegistryUnavailable
/// [`RegistryParseError`]: HardenError::RegistryParseError
/// [`UnknownEvent`]: HardenError::UnknownEvent
/// [`MissingEventPackage`]: HardenError::MissingEventPackage
/// [`FileSystemError`]: HardenError::FileSystemError
/// [`PermissionDenied`]: HardenError::PermissionDenied
/// [`IoError`]: HardenError::IoError
#[derive(Error, Debug)]
pub enum HardenError {
    /// Generic configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {file}")]
    ConfigParseError {
        /// Path of the offending file
        file: String,
        /// Parser message
        reason: String,
    },

    /// A configured cleanup path is not a safe relative path
    #[error("Invalid cleanup path '{path}' for package '{package}': {reason}")]
    InvalidCleanupPath {
        /// Package the path is configured for
        package: String,
        /// The rejected path
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// The installed package registry could not be read
    #[error("Installed package registry not found or unreadable: {path}")]
    RegistryUnavailable {
        /// Path of `installed.json`
        path: String,
    },

    /// The installed package registry has an unexpected shape
    #[error("Invalid installed package registry in {file}")]
    RegistryParseError {
        /// Path of `installed.json`
        file: String,
        /// Parser message
        reason: String,
    },

    /// Lifecycle event name not recognised
    #[error("Unknown lifecycle event: {name}")]
    UnknownEvent {
        /// The name that was given
        name: String,
    },

    /// Per-package lifecycle event without a package name
    #[error("Lifecycle event '{event}' requires a package name")]
    MissingEventPackage {
        /// The event that was fired
        event: String,
    },

    /// General filesystem failure
    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was attempted
        operation: String,
        /// Path involved
        path: String,
    },

    /// Insufficient permissions
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// What was attempted
        operation: String,
        /// Path involved
        path: String,
    },

    /// Standard I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for HardenError {
    fn clone(&self) -> Self {
        match self {
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::ConfigParseError {
                file,
                reason,
            } => Self::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::InvalidCleanupPath {
                package,
                path,
                reason,
            } => Self::InvalidCleanupPath {
                package: package.clone(),
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::RegistryUnavailable {
                path,
            } => Self::RegistryUnavailable {
                path: path.clone(),
            },
            Self::RegistryParseError {
                file,
                reason,
            } => Self::RegistryParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::UnknownEvent {
                name,
            } => Self::UnknownEvent {
                name: name.clone(),
            },
            Self::MissingEventPackage {
                event,
            } => Self::MissingEventPackage {
                event: event.clone(),
            },
            Self::FileSystemError {
                operation,
                path,
            } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::PermissionDenied {
                operation,
                path,
            } => Self::PermissionDenied {
                operation: operation.clone(),
                path: path.clone(),
            },
            // These wrapped errors are not Clone; keep their message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper carrying a suggestion and details for CLI display
///
/// # Examples
///
/// ```rust,no_run
/// use vendor_harden_cli::core::{HardenError, ErrorContext};
///
/// let context = ErrorContext::new(HardenError::UnknownEvent { name: "pre-install".into() })
///     .with_suggestion("Use one of: post-install-cmd, post-update-cmd")
///     .with_details("Only post-command events are supported");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: HardenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details
    #[must_use]
    pub const fn new(error: HardenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognises [`HardenError`] (possibly wrapped in `anyhow` context), I/O errors,
/// TOML and JSON errors; anything else is rendered with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(harden_error) = error.downcast_ref::<HardenError>() {
        return create_error_context(harden_error.clone());
    }

    // Errors wrapped with `.context(...)` keep the typed error further down the chain
    for cause in error.chain().skip(1) {
        if let Some(harden_error) = cause.downcast_ref::<HardenError>() {
            return create_error_context(harden_error.clone())
                .with_details(format!("{error}"));
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(HardenError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check ownership of the vendor directory or re-run as the user that ran composer")
                .with_details("vendor-harden needs write access to the vendor directory to remove paths and write marker files");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(HardenError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the project and vendor directories exist")
                .with_details(
                    "This error occurs when a required file or directory cannot be found",
                );
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(HardenError::ConfigParseError {
            file: crate::constants::PROJECT_CONFIG_FILE.to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of the configuration file. Verify quotes and brackets");
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(HardenError::ConfigParseError {
            file: crate::constants::COMPOSER_JSON.to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion("Run 'composer validate' to check composer.json");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(HardenError::Other {
        message,
    })
}

/// Map each [`HardenError`] variant to a context with tailored suggestions
fn create_error_context(error: HardenError) -> ErrorContext {
    match &error {
        HardenError::RegistryUnavailable { path } => ErrorContext::new(error.clone())
            .with_suggestion("Run 'composer install' first, or pass --vendor-dir if the vendor directory was relocated")
            .with_details(format!(
                "The list of installed packages is read from {path}. Without it no package can be cleaned safely"
            )),

        HardenError::RegistryParseError { file, .. } => ErrorContext::new(error.clone())
            .with_suggestion("Re-run 'composer install' to regenerate the installed package registry")
            .with_details(format!("{file} is not a Composer 1 or Composer 2 installed.json file")),

        HardenError::ConfigParseError { file, reason } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Fix the syntax in {file}. Supported sections are [extend], [ignore] and [ignore.paths]"
            ))
            .with_details(reason.clone()),

        HardenError::InvalidCleanupPath { package, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Use a path relative to the install directory of '{package}', without '..'"
            ))
            .with_details("Cleanup paths are joined onto each package's install path and must stay inside it"),

        HardenError::UnknownEvent { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Use one of: post-install-cmd, post-update-cmd, post-package-install, post-package-update, post-autoload-dump"),

        HardenError::MissingEventPackage { event } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Pass the package as '{event}:vendor/name'")),

        HardenError::PermissionDenied { operation, path } => ErrorContext::new(error.clone())
            .with_suggestion(match cfg!(windows) {
                true => "Run as Administrator or check file permissions in File Explorer",
                false => "Check file permissions with 'ls -la' or run as the owner of the vendor directory",
            })
            .with_details(format!(
                "Cannot {operation} due to insufficient permissions on {path}"
            )),

        _ => ErrorContext::new(error.clone()),
    }
}
