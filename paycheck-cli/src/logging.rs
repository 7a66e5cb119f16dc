//! Diagnostics for the `paycheck` binary.
//!
//! Reports go to stdout, so every log line goes to stderr and, when the
//! config names one, to a log file opened before the subscriber starts.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Level used when neither `RUST_LOG`, `-v` nor the config picks one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Local wall-clock timestamps with the UTC offset.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(
        &self,
        w: &mut Writer<'_>,
    ) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

/// Maps `-v` repetitions onto a level. Zero means "not requested".
pub fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// The filter directive when `RUST_LOG` is unset: `-v` beats the config
/// level, which beats [`DEFAULT_LEVEL`].
pub fn directive<'a>(
    verbose: u8,
    config_level: Option<&'a str>,
) -> &'a str {
    level_for_verbosity(verbose)
        .or(config_level)
        .unwrap_or(DEFAULT_LEVEL)
}

fn build_filter(directive: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log level '{directive}'"))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Installs the global subscriber. Call once, after the config is read.
///
/// `RUST_LOG` overrides `directive`. A `file` is appended to without ANSI
/// colours; its directory must already exist.
pub fn init_logging(
    directive: &str,
    file: Option<&Path>,
) -> Result<()> {
    let filter = build_filter(directive)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = file
        .map(open_log_file)
        .transpose()?
        .map(|file| {
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")
}
