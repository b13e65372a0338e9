//! Write web server access restriction files into the vendor directory.

use anyhow::Result;
use clap::Args;

use super::common::CommandContext;
use crate::access::write_access_restriction_files;

/// Command to write `.htaccess` and `web.config` into the vendor directory.
#[derive(Args, Debug)]
pub struct ProtectCommand {}

impl ProtectCommand {
    /// Execute the protect command.
    ///
    /// # Errors
    ///
    /// Fails when the files cannot be written.
    pub async fn execute(self, ctx: CommandContext) -> Result<()> {
        let written = write_access_restriction_files(ctx.vendor_dir())?;

        for path in &written {
            ctx.reporter.verbose(&format!("  Wrote {}", path.display()));
        }
        ctx.reporter.info(&format!(
            "Access restriction files written to {}.",
            ctx.vendor_dir().display()
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::HTACCESS_CONTENT;
    use crate::core::{Reporter, Verbosity};
    use crate::test_utils::VendorFixture;

    #[tokio::test]
    async fn test_protect_writes_files() {
        let fixture = VendorFixture::new().unwrap();
        let reporter = Reporter::capture(Verbosity::Verbose);
        let ctx =
            CommandContext::load(fixture.project_dir(), None, None, None, reporter.clone()).unwrap();

        ProtectCommand {}.execute(ctx).await.unwrap();

        let htaccess = std::fs::read_to_string(fixture.vendor_dir().join(".htaccess")).unwrap();
        assert_eq!(htaccess, HTACCESS_CONTENT);
        assert!(fixture.vendor_dir().join("web.config").is_file());
        assert_eq!(reporter.captured().len(), 3);
    }
}
