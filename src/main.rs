//! lsync command-line interface
//!
//! `lsync <SOURCE> <DESTINATION>` mirrors SOURCE into DESTINATION with hard links.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lsync::{SyncError, Termination};

/// Mirror a directory tree using hard links.
///
/// Existing destination entries are kept; only missing ones are created.
/// Set RUST_LOG=debug to see every directory and link as it is made.
#[derive(Parser, Debug)]
#[command(name = "lsync", version, about)]
struct Cli {
    /// Directory to mirror
    #[arg(allow_hyphen_values = true)]
    source: PathBuf,

    /// Directory to mirror into (created if missing)
    #[arg(allow_hyphen_values = true)]
    destination: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => usage_error(e),
    };
    init_logging();

    let result = lsync::sync()
        .source(cli.source)
        .destination(cli.destination)
        .run();

    match result {
        Ok(stats) => {
            info!(
                dirs_created = stats.dirs_created,
                ancestors_created = stats.ancestors_created,
                links_created = stats.links_created,
                dirs_existing = stats.dirs_existing,
                files_existing = stats.files_existing,
                elapsed_secs = stats.duration.as_secs_f64(),
                "sync complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => terminate(&e),
    }
}

/// `--help` and `--version` exit normally; any other bad invocation aborts.
fn usage_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let _ = err.print();
            std::process::abort()
        }
    }
}

/// Report `err` on stderr and end the process the way its class demands.
fn terminate(err: &SyncError) -> ExitCode {
    eprintln!("{}", describe(err).as_str().red().bold());
    match err.termination() {
        Termination::Exit(code) => ExitCode::from(code),
        Termination::Abort => std::process::abort(),
    }
}

/// The error message followed by its source chain, unless the message already ends with it.
fn describe(err: &SyncError) -> String {
    let mut msg = err.to_string();
    let mut cause = std::error::Error::source(err);
    while let Some(c) = cause {
        let text = c.to_string();
        if !msg.ends_with(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        cause = c.source();
    }
    msg
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // Already installed is fine
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
