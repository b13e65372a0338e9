//! Web server access restriction for the vendor directory.
//!
//! Projects that expose their root over HTTP also expose `vendor/` unless the
//! web server is told otherwise. Two static marker files fix that: an
//! `.htaccess` for Apache-compatible servers and a `web.config` for IIS. Their
//! content is fixed, so writing them again produces byte-identical files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::constants::{HTACCESS_FILE, WEB_CONFIG_FILE};
use crate::utils::fs::{atomic_write, ensure_dir};

/// Apache rules denying every request, for both 2.2 and 2.4 style access
/// control, and disabling script execution in case the deny is overridden.
pub const HTACCESS_CONTENT: &str = r"# Deny all requests from Apache 2.4+.
<IfModule mod_authz_core.c>
  Require all denied
</IfModule>

# Deny all requests from Apache 2.0-2.2.
<IfModule !mod_authz_core.c>
  Deny from all
</IfModule>

# Turn off all options we don't need.
Options -Indexes -ExecCGI -Includes -MultiViews

# If we know how to do it safely, disable the PHP engine entirely.
<IfModule mod_php5.c>
  php_flag engine off
</IfModule>
<IfModule mod_php7.c>
  php_flag engine off
</IfModule>
<IfModule mod_php.c>
  php_flag engine off
</IfModule>
";

/// IIS configuration denying every request.
pub const WEB_CONFIG_CONTENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<configuration>
  <system.webServer>
    <security>
      <authorization>
        <remove users="*" roles="" verbs="" />
        <add accessType="Deny" users="*" />
      </authorization>
    </security>
  </system.webServer>
</configuration>
"#;

/// The marker files as `(file name, content)` pairs.
pub const ACCESS_RESTRICTION_FILES: [(&str, &str); 2] =
    [(HTACCESS_FILE, HTACCESS_CONTENT), (WEB_CONFIG_FILE, WEB_CONFIG_CONTENT)];

/// Write `.htaccess` and `web.config` at the root of `vendor_dir`.
///
/// The directory is created if it does not exist yet. Existing files are
/// replaced atomically. Returns the paths written.
///
/// # Errors
///
/// Fails when the directory cannot be created or a file cannot be written.
pub fn write_access_restriction_files(vendor_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(vendor_dir)?;

    let mut written = Vec::with_capacity(ACCESS_RESTRICTION_FILES.len());
    for (file_name, content) in ACCESS_RESTRICTION_FILES {
        let path = vendor_dir.join(file_name);
        atomic_write(&path, content.as_bytes())
            .with_context(|| format!("Failed to write access restriction file {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
