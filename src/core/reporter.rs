//! User-facing status output with verbosity levels.
//!
//! Composer hooks report progress on the host's status stream (stderr) at three
//! levels: normal output (start, summary, failures), verbose output (one line per
//! removed path) and very verbose output (skips and "already cleaned" notices).
//! [`Reporter`] implements those levels and the three severities (info, comment,
//! error). Internal diagnostics go through `tracing` instead.

use colored::Colorize;
use std::sync::{Arc, Mutex};

/// How much status output the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Start, summary and failures
    #[default]
    Normal,
    /// Adds one line per removed path
    Verbose,
    /// Adds skips and already-cleaned notices
    VeryVerbose,
    /// Same output as [`Verbosity::VeryVerbose`]; also enables debug tracing
    Debug,
}

impl Verbosity {
    /// Map a `-v` count and `--quiet` flag to a level.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::VeryVerbose,
            _ => Self::Debug,
        }
    }
}

/// Severity of a status line; controls its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress information
    Info,
    /// Secondary detail, such as package names and skipped paths
    Comment,
    /// A failure that did not stop the batch
    Error,
}

#[derive(Debug, Clone)]
enum Sink {
    Stderr,
    Capture(Arc<Mutex<Vec<String>>>),
}

/// Writes status lines filtered by [`Verbosity`].
///
/// Cloning a reporter shares its sink, so a captured reporter handed to the
/// cleaner can still be inspected by the test that created it.
///
/// # Examples
///
/// ```rust
/// use vendor_harden_cli::core::{Reporter, Verbosity};
///
/// let reporter = Reporter::capture(Verbosity::Verbose);
/// reporter.info("Cleaning installed packages.");
/// reporter.very_verbose_comment("not shown");
/// assert_eq!(reporter.captured(), vec!["Cleaning installed packages.".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Reporter {
    verbosity: Verbosity,
    sink: Sink,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stderr(Verbosity::Normal)
    }
}

impl Reporter {
    /// Reporter writing colourised lines to stderr.
    #[must_use]
    pub const fn stderr(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            sink: Sink::Stderr,
        }
    }

    /// Reporter keeping plain lines in memory.
    #[must_use]
    pub fn capture(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            sink: Sink::Capture(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Current verbosity.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Lines written so far by a capturing reporter; empty for stderr.
    #[must_use]
    pub fn captured(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stderr => Vec::new(),
            Sink::Capture(lines) => lines.lock().map(|lines| lines.clone()).unwrap_or_default(),
        }
    }

    /// Write `message` if the reporter is at least as verbose as `level`.
    pub fn write(&self, level: Verbosity, severity: Severity, message: &str) {
        // Errors are shown even in quiet mode
        let visible = match severity {
            Severity::Error => level <= self.verbosity.max(Verbosity::Normal),
            _ => self.verbosity != Verbosity::Quiet && level <= self.verbosity,
        };
        if !visible {
            return;
        }

        match &self.sink {
            Sink::Stderr => {
                let line = match severity {
                    Severity::Info => message.green().to_string(),
                    Severity::Comment => message.yellow().to_string(),
                    Severity::Error => message.red().to_string(),
                };
                eprintln!("{line}");
            }
            Sink::Capture(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(message.to_string());
                }
            }
        }
    }

    /// Normal-level info line.
    pub fn info(&self, message: &str) {
        self.write(Verbosity::Normal, Severity::Info, message);
    }

    /// Normal-level comment line.
    pub fn comment(&self, message: &str) {
        self.write(Verbosity::Normal, Severity::Comment, message);
    }

    /// Normal-level error line.
    pub fn error(&self, message: &str) {
        self.write(Verbosity::Normal, Severity::Error, message);
    }

    /// Verbose-level info line.
    pub fn verbose(&self, message: &str) {
        self.write(Verbosity::Verbose, Severity::Info, message);
    }

    /// Very-verbose comment line.
    pub fn very_verbose_comment(&self, message: &str) {
        self.write(Verbosity::VeryVerbose, Severity::Comment, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(2, false), Verbosity::VeryVerbose);
        assert_eq!(Verbosity::from_flags(5, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    }

    #[test]
    fn test_normal_hides_verbose_lines() {
        let reporter = Reporter::capture(Verbosity::Normal);
        reporter.info("start");
        reporter.verbose("removing tests");
        reporter.very_verbose_comment("already cleaned");
        reporter.error("failed");

        assert_eq!(reporter.captured(), vec!["start", "failed"]);
    }

    #[test]
    fn test_very_verbose_shows_everything() {
        let reporter = Reporter::capture(Verbosity::VeryVerbose);
        reporter.info("start");
        reporter.verbose("removing tests");
        reporter.very_verbose_comment("already cleaned");

        assert_eq!(reporter.captured().len(), 3);
    }

    #[test]
    fn test_quiet_keeps_errors_only() {
        let reporter = Reporter::capture(Verbosity::Quiet);
        reporter.info("start");
        reporter.comment("note");
        reporter.error("failed");

        assert_eq!(reporter.captured(), vec!["failed"]);
    }

    #[test]
    fn test_clone_shares_capture() {
        let reporter = Reporter::capture(Verbosity::Normal);
        let clone = reporter.clone();
        clone.info("from clone");
        assert_eq!(reporter.captured(), vec!["from clone"]);
    }

    #[test]
    fn test_stderr_has_no_capture() {
        let reporter = Reporter::stderr(Verbosity::Normal);
        assert!(reporter.captured().is_empty());
    }
}
