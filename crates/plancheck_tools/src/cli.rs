//! Command-line entry point logic.
//!
//! Kept out of `main.rs` so the whole invocation contract (arguments,
//! output and exit codes) can be driven against an in-memory writer.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use plancheck_core::checker::PlanFieldChecker;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::load::load_plan;
use crate::report::Report;
use crate::{EXIT_FAILED, EXIT_OK, EXIT_USAGE};

/// Usage line printed for any argument error.
pub const USAGE: &str = "Usage: plancheck <plan.json>";

/// Check that every straight, rpe, percentage and scheme segment of a
/// workout plan carries `rest_sec` and `rpe`.
#[derive(Debug, Parser)]
#[command(name = "plancheck")]
#[command(version)]
pub struct Cli {
    /// Path to the plan JSON document
    pub plan: PathBuf,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, falling
/// back to `info`. A subscriber that is already installed is left alone.
///
/// Load and shape failures are reported only through this subscriber, so
/// with `RUST_LOG=off` they exit 1 without any message.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

/// Parse `args` (including the program name) and run the check, writing
/// the report to `out`. Returns the process exit code.
pub fn run<I, T, W>(args: I, out: &mut W) -> io::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render())?;
            out.flush()?;
            return Ok(EXIT_OK);
        }
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "Rejected arguments");
            writeln!(out, "{USAGE}")?;
            out.flush()?;
            return Ok(EXIT_USAGE);
        }
    };

    init_tracing(cli.verbose);
    let code = execute(&cli, out)?;
    out.flush()?;
    Ok(code)
}

/// Check the plan named by `cli` and write the report.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> io::Result<i32> {
    tracing::debug!(path = %cli.plan.display(), "Checking plan");

    let checked = load_plan(&cli.plan).and_then(|plan| PlanFieldChecker::new().check(&plan));
    let violations = match checked {
        Ok(violations) => violations,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(EXIT_FAILED);
        }
    };

    let report = Report::new(violations);
    if cli.json {
        report.write_json(out)?;
    } else {
        report.write_text(out)?;
    }

    tracing::debug!(
        violations = report.violations().len(),
        passed = report.passed(),
        "Plan check finished"
    );
    Ok(report.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_path() {
        let cli = Cli::try_parse_from(["plancheck", "plan.json"]).unwrap();
        assert_eq!(cli.plan, PathBuf::from("plan.json"));
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_do_not_count_as_arguments() {
        let cli = Cli::try_parse_from(["plancheck", "--json", "-v", "plan.json"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_wrong_arity_prints_usage() {
        for args in [
            vec!["plancheck"],
            vec!["plancheck", "a.json", "b.json"],
            vec!["plancheck", "--bogus", "a.json"],
        ] {
            let mut out = Vec::new();
            let code = run(args, &mut out).unwrap();
            assert_eq!(code, 2);
            assert_eq!(String::from_utf8(out).unwrap(), "Usage: plancheck <plan.json>\n");
        }
    }

    #[test]
    fn test_help_exits_cleanly() {
        let mut out = Vec::new();
        let code = run(["plancheck", "--help"], &mut out).unwrap();
        assert_eq!(code, 0);
        assert!(String::from_utf8(out).unwrap().contains("--json"));
    }

    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_flush_failure_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(&path, r#"{"schedule": []}"#).unwrap();

        let mut out = FailingFlush(Vec::new());
        let err = run(["plancheck".to_string(), path.display().to_string()], &mut out).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
