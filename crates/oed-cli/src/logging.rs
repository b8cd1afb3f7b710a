//! Tracing subscriber setup for the validator binary.
//!
//! Library crates emit events and spans; this module installs the subscriber
//! that filters and formats them. Workspace crates log at the level chosen on
//! the command line and third-party crates stay at `warn`.
//!
//! # Log Levels
//!
//! - `error`: Fatal errors
//! - `warn`: Non-fatal issues (default)
//! - `info`: Schema loading and file-level progress
//! - `debug`: Per-column processing
//! - `trace`: Per-value failures
//!
//! # Usage
//!
//! ```ignore
//! use oed_cli::logging::{init_logging, LogConfig, LogFormat};
//!
//! let config = LogConfig::default().with_format(LogFormat::Compact);
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events follow the configured level; others stay at warn.
const WORKSPACE_TARGETS: &[&str] = &[
    "oed_cli",
    "oed_ingest",
    "oed_model",
    "oed_standards",
    "oed_validate",
];

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field human-readable lines.
    #[default]
    Pretty,
    /// Single-line format.
    Compact,
    /// One JSON object per event, with span close events.
    Json,
}

/// Where log lines go. Report lines always go to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogDestination {
    #[default]
    Stderr,
    /// Appended to; lines carry timestamps.
    File(PathBuf),
}

impl LogDestination {
    pub fn is_file(&self) -> bool {
        matches!(self, LogDestination::File(_))
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to the workspace crates.
    pub level_filter: LevelFilter,
    /// Whether a valid `RUST_LOG` replaces the level-derived directives.
    pub use_env_filter: bool,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub destination: LogDestination,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: true,
            destination: LogDestination::default(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, enable: bool) -> Self {
        self.use_env_filter = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: LogDestination) -> Self {
        self.destination = destination;
        self
    }

    /// Module targets are shown once per-column events are enabled.
    fn show_targets(&self) -> bool {
        self.level_filter >= LevelFilter::DEBUG
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.destination {
        LogDestination::Stderr => BoxMakeWriter::new(io::stderr),
        LogDestination::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Arc::new(file))
        }
    };
    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(fmt_layer(config, writer))
        .init();
    Ok(())
}

fn fmt_layer<S>(config: &LogConfig, writer: BoxMakeWriter) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.show_targets());
    let ansi = config.with_ansi;
    match (config.format, config.destination.is_file()) {
        (LogFormat::Json, _) => layer.json().with_span_events(FmtSpan::CLOSE).boxed(),
        (LogFormat::Compact, true) => layer.compact().with_ansi(ansi).boxed(),
        (LogFormat::Compact, false) => layer.compact().with_ansi(ansi).without_time().boxed(),
        (LogFormat::Pretty, true) => layer.with_ansi(ansi).boxed(),
        (LogFormat::Pretty, false) => layer.with_ansi(ansi).without_time().boxed(),
    }
}

/// Default filter directives: workspace crates at `level`, everything else at warn.
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    std::iter::once("warn".to_string())
        .chain(
            WORKSPACE_TARGETS
                .iter()
                .map(|target| format!("{target}={level}")),
        )
        .collect::<Vec<_>>()
        .join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let default = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default())
    } else {
        default()
    }
}
