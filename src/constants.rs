//! Global constants used throughout the vendor-harden codebase.
//!
//! File names, environment variables and configuration keys shared by the
//! configuration loader, the registry adapter and the access restriction
//! writer. Defining them centrally keeps the on-disk contract in one place.

/// Name of the project-level configuration file looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "vendor-harden.toml";

/// Composer's project manifest.
pub const COMPOSER_JSON: &str = "composer.json";

/// Key under `extra` in `composer.json` holding the cleanup configuration.
pub const COMPOSER_EXTRA_KEY: &str = "vendor-hardening";

/// Default vendor directory name relative to the project root.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

/// Directory inside the vendor directory where Composer keeps its metadata.
pub const COMPOSER_META_DIR: &str = "composer";

/// Composer's local repository file, relative to [`COMPOSER_META_DIR`].
pub const INSTALLED_JSON: &str = "installed.json";

/// Apache-compatible access restriction file name.
pub const HTACCESS_FILE: &str = ".htaccess";

/// IIS-compatible access restriction file name.
pub const WEB_CONFIG_FILE: &str = "web.config";

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "VENDOR_HARDEN_CONFIG";

/// Environment variable Composer honours to relocate the vendor directory.
pub const COMPOSER_VENDOR_DIR_ENV_VAR: &str = "COMPOSER_VENDOR_DIR";
