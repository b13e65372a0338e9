//! Command-line interface for vendor-harden.
//!
//! # Available Commands
//!
//! - `clean` - Remove configured paths from installed packages
//! - `protect` - Write `.htaccess` and `web.config` into the vendor directory
//! - `hook` - Handle Composer lifecycle events (for `composer.json` scripts)
//! - `paths` - Show the merged cleanup configuration
//!
//! # Global Options
//!
//! - `-v`, `-vv`, `-vvv` - Verbose (each removed path), very verbose (skips and
//!   already-cleaned notices), debug (internal tracing)
//! - `-q` - Errors only
//! - `--project-dir` - Project root (default: current directory)
//! - `--vendor-dir` - Vendor directory (default: `COMPOSER_VENDOR_DIR`, then
//!   `config.vendor-dir` in `composer.json`, then `vendor`)
//! - `--config` - Configuration file (default: `VENDOR_HARDEN_CONFIG`, then
//!   `vendor-harden.toml`, then `extra.vendor-hardening` in `composer.json`)
//! - `--no-color` - Plain output
//!
//! # Usage
//!
//! ```bash
//! # After composer install
//! vendor-harden hook post-install-cmd post-autoload-dump
//!
//! # What would be removed?
//! vendor-harden paths --installed
//! ```

mod clean;
pub mod common;
mod hook;
mod paths;
mod protect;


use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{COMPOSER_VENDOR_DIR_ENV_VAR, CONFIG_ENV_VAR};
use crate::core::{Reporter, Verbosity};
use common::CommandContext;

/// Main CLI structure for vendor-harden.
#[derive(Parser, Debug)]
#[command(
    name = "vendor-harden",
    about = "Strip tests, docs and examples from Composer packages and lock down the vendor directory",
    version,
    long_about = "vendor-harden runs after Composer installs or updates dependencies. It removes \
                  non-runtime directories from installed packages and writes web server access \
                  restriction files into the vendor directory."
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Increase output (-v: each removed path, -vv: skips, -vvv: debug tracing)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Project root containing composer.json (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Vendor directory, relative to the project root
    #[arg(long, global = true, value_name = "DIR")]
    vendor_dir: Option<PathBuf>,

    /// Cleanup configuration file, relative to the project root
    #[arg(long, global = true, value_name = "FILE", env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remove configured paths from installed packages
    Clean(clean::CleanCommand),

    /// Write access restriction files into the vendor directory
    Protect(protect::ProtectCommand),

    /// Handle Composer lifecycle events
    Hook(hook::HookCommand),

    /// Show configured cleanup paths
    Paths(paths::PathsCommand),
}

impl Cli {
    /// Verbosity selected by `-v` / `-q`.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            Verbosity::Debug => "debug",
            _ => "warn",
        }
    }

    /// Whether colour output was disabled on the command line.
    #[must_use]
    pub const fn no_color(&self) -> bool {
        self.no_color
    }

    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns systemic failures: invalid configuration, unreadable registry,
    /// unknown events, unwritable marker files.
    pub async fn execute(self) -> Result<()> {
        let project_dir = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Cannot determine the current directory")?,
        };
        let env_vendor_dir = std::env::var(COMPOSER_VENDOR_DIR_ENV_VAR).ok();

        let ctx = CommandContext::load(
            &project_dir,
            self.vendor_dir.as_deref(),
            env_vendor_dir.as_deref(),
            self.config.as_deref(),
            Reporter::stderr(self.verbosity()),
        )?;

        match self.command {
            Commands::Clean(cmd) => cmd.execute(ctx).await,
            Commands::Protect(cmd) => cmd.execute(ctx).await,
            Commands::Hook(cmd) => cmd.execute(ctx).await,
            Commands::Paths(cmd) => cmd.execute(ctx).await,
        }
    }
}
