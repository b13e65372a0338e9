//! Remove configured paths from installed packages.
//!
//! # Examples
//!
//! ```bash
//! # Sweep every installed package
//! vendor-harden clean
//!
//! # Clean specific packages
//! vendor-harden clean twig/twig symfony/console
//!
//! # Show every removed path
//! vendor-harden -v clean
//! ```

use anyhow::Result;
use clap::Args;

use super::common::CommandContext;

/// Command to remove configured paths from installed packages.
#[derive(Args, Debug)]
pub struct CleanCommand {
    /// Packages to clean (`vendor/name`); all installed packages when omitted
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,
}

impl CleanCommand {
    /// Execute the clean command.
    ///
    /// # Errors
    ///
    /// Fails when the installed package registry cannot be read. Paths that
    /// cannot be removed are reported but do not fail the command.
    pub async fn execute(self, ctx: CommandContext) -> Result<()> {
        let (mut cleaner, _) = ctx.into_cleaner();

        if self.packages.is_empty() {
            cleaner.clean_all().await?;
            return Ok(());
        }

        for package in &self.packages {
            let report = cleaner.clean_one(package).await?;
            if let Some(reason) = report.skipped {
                tracing::debug!("{} skipped: {}", report.package, reason);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Reporter, Verbosity};
    use crate::test_utils::VendorFixture;

    fn context(fixture: &VendorFixture) -> CommandContext {
        CommandContext::load(
            fixture.project_dir(),
            None,
            None,
            None,
            Reporter::capture(Verbosity::Normal),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_clean_all_with_defaults() {
        let mut fixture = VendorFixture::new().unwrap();
        fixture.add_package("twig/twig", &["doc", "tests"]).unwrap();
        fixture.write_installed_json().unwrap();

        let cmd = CleanCommand {
            packages: vec![],
        };
        cmd.execute(context(&fixture)).await.unwrap();

        assert!(!fixture.path("twig/twig", "doc").exists());
        assert!(!fixture.path("twig/twig", "tests").exists());
        assert!(fixture.path("twig/twig", "src").exists());
    }

    #[tokio::test]
    async fn test_clean_named_package_only() {
        let mut fixture = VendorFixture::new().unwrap();
        fixture.add_package("twig/twig", &["doc"]).unwrap();
        fixture.add_package("psr/log", &["Psr/Log/Test"]).unwrap();
        fixture.write_installed_json().unwrap();

        let cmd = CleanCommand {
            packages: vec!["Twig/Twig".to_string()],
        };
        cmd.execute(context(&fixture)).await.unwrap();

        assert!(!fixture.path("twig/twig", "doc").exists());
        assert!(fixture.path("psr/log", "Psr/Log/Test").exists());
    }

    #[tokio::test]
    async fn test_clean_without_registry_fails() {
        let fixture = VendorFixture::new().unwrap();

        let cmd = CleanCommand {
            packages: vec![],
        };
        assert!(cmd.execute(context(&fixture)).await.is_err());
    }
}
