//! Core types and functionality for vendor-harden
//!
//! This module forms the foundation of the crate's type system: the error
//! hierarchy, package identifiers and the status reporter shared by every
//! other module.
//!
//! # Modules
//!
//! ## `error` - Error Handling
//! - [`HardenError`] - Enumerated systemic failures (configuration, registry, events)
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! ## `package` - Package Model
//! - [`PackageName`] - Case-insensitive `vendor/name` identifier
//! - [`InstalledPackage`] - Read-only view of one entry of the installed package registry
//!
//! ## `reporter` - Status Output
//! - [`Reporter`] - Status lines filtered by [`Verbosity`] and coloured by [`Severity`]
//!
//! # Examples
//!
//! ```rust
//! use vendor_harden_cli::core::{HardenError, PackageName};
//! use anyhow::Result;
//!
//! fn lookup(name: &str) -> Result<PackageName> {
//!     if name.contains('/') {
//!         Ok(PackageName::new(name))
//!     } else {
//!         Err(HardenError::ConfigError {
//!             message: format!("'{name}' is not a vendor/name identifier"),
//!         }
//!         .into())
//!     }
//! }
//!
//! assert_eq!(lookup("Twig/Twig").unwrap().as_str(), "twig/twig");
//! ```

pub mod error;
pub mod package;
pub mod reporter;

pub use error::{ErrorContext, HardenError, user_friendly_error};
pub use package::{InstalledPackage, PackageName};
pub use reporter::{Reporter, Severity, Verbosity};
