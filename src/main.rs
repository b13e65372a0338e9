//! vendor-harden CLI entry point
//!
//! Parses arguments, sets up diagnostics and colour, runs the command and turns
//! failures into a user-friendly message with exit status 1.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vendor_harden_cli::cli;
use vendor_harden_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if cli.no_color() {
        colored::control::set_override(false);
    }

    // RUST_LOG wins over -vvv
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
