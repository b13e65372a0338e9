//! Show the merged cleanup configuration.
//!
//! Read-only: nothing is removed. Installed packages are marked, and for those
//! the size currently occupied by each configured path is shown.
//!
//! ```text
//! Configuration: vendor-harden.toml
//!
//! twig/twig (installed)
//!   doc      412.3 KiB
//!   ext      absent
//!   test     absent
//!   tests    1.2 MiB
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::common::CommandContext;
use crate::core::PackageName;
use crate::registry::PackageRepository;
use crate::utils::fs::{disk_usage, format_size};

/// Command to display configured cleanup paths.
#[derive(Args, Debug)]
pub struct PathsCommand {
    /// Show a single package
    #[arg(value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Only show packages that are currently installed
    #[arg(long)]
    pub installed: bool,
}

impl PathsCommand {
    /// Execute the paths command.
    ///
    /// # Errors
    ///
    /// This command does not fail on a missing registry; installation state is
    /// then reported as unknown.
    pub async fn execute(self, ctx: CommandContext) -> Result<()> {
        let installed = match ctx.repository().installed_packages() {
            Ok(packages) => Some(
                packages
                    .into_iter()
                    .map(|package| (package.name, package.install_path))
                    .collect::<BTreeMap<PackageName, Option<PathBuf>>>(),
            ),
            Err(e) => {
                tracing::debug!("Registry unavailable: {:#}", e);
                ctx.reporter.comment("Installed packages unknown: no readable installed.json.");
                if self.installed {
                    ctx.reporter.error(
                        "The --installed filter could not be applied: installation state is unknown.",
                    );
                }
                None
            }
        };

        println!("{} {}", "Configuration:".bold(), ctx.config_source);

        if let Some(name) = &self.package {
            let name = PackageName::new(name);
            if !ctx.config.contains(&name) {
                println!();
                println!("{name}: no cleanup paths configured");
                return Ok(());
            }
        }

        let mut shown = 0usize;
        for (name, paths) in ctx.config.iter() {
            if self.package.as_ref().is_some_and(|wanted| PackageName::new(wanted) != *name) {
                continue;
            }

            let install_path = installed.as_ref().and_then(|installed| installed.get(name));
            if self.installed && install_path.is_none() {
                continue;
            }

            println!();
            match install_path {
                Some(_) => println!("{} {}", name.as_str().bold(), "(installed)".green()),
                None => println!("{}", name.as_str().bold()),
            }

            let width = paths.iter().map(String::len).max().unwrap_or(0);
            for relative in paths {
                let size = install_path.and_then(Option::as_deref).map(|root| {
                    disk_usage(&root.join(relative))
                        .map_or_else(|| "absent".dimmed().to_string(), format_size)
                });

                match size {
                    Some(size) => println!("  {relative:<width$}  {size}"),
                    None => println!("  {relative}"),
                }
            }
            shown += 1;
        }

        tracing::debug!("Listed {} of {} configured packages", shown, ctx.config.len());
        Ok(())
    }
}
