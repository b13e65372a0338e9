//! Integration test suite for vendor-harden
//!
//! End-to-end tests driving the `vendor-harden` binary against throwaway
//! Composer projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **clean**: `clean` with and without package arguments
//! - **config**: project configuration sources and error reporting
//! - **hook**: lifecycle event dispatch and cross-event deduplication
//! - **paths**: the read-only configuration report
//! - **protect**: access restriction files

#[path = "../common/mod.rs"]
mod common;

mod clean;
mod config;
mod hook;
mod paths;
mod protect;
