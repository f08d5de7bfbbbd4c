//! Diagnostic output for the `treemend` binary.
//!
//! One global `tracing` subscriber writes to stderr so stdout carries only the
//! repair report. `TREEMEND_LOG_FORMAT` picks the line format and `RUST_LOG`
//! overrides [`DEFAULT_DIRECTIVES`]. Records from crates using the `log`
//! facade are forwarded through `tracing-log`.

use std::{env, io, str::FromStr};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, filter::ParseError, fmt, layer::SubscriberExt};

/// Environment variable selecting the diagnostic format.
pub const FORMAT_VAR: &str = "TREEMEND_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or blank: pipeline progress from the
/// treemend crates, warnings from everything else.
pub const DEFAULT_DIRECTIVES: &str =
    "warn,treemend_core=info,treemend_providers_text=info,treemend_cli=info";

/// Line format of the diagnostic stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// One flattened JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if trimmed.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(LoggingError::UnknownFormat(trimmed.to_owned()))
        }
    }
}

/// Failures while installing diagnostics. Each one stops the binary before
/// any input is read.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `TREEMEND_LOG_FORMAT` named an unsupported format.
    #[error("{FORMAT_VAR} must be `human` or `json`, got `{0}`")]
    UnknownFormat(String),
    /// `TREEMEND_LOG_FORMAT` was not valid UTF-8.
    #[error("{FORMAT_VAR} is not valid UTF-8")]
    FormatNotUnicode,
    /// `RUST_LOG` held a directive `EnvFilter` cannot parse.
    #[error("invalid RUST_LOG directives: {0}")]
    Filter(#[from] ParseError),
    /// Another `log` logger was registered first.
    #[error("cannot forward `log` records: {0}")]
    LogBridge(String),
    /// Another global `tracing` subscriber was installed first.
    #[error("cannot install the tracing subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Reads the format from `TREEMEND_LOG_FORMAT`, defaulting to
/// [`LogFormat::Human`] when it is unset.
///
/// # Errors
/// Returns [`LoggingError::UnknownFormat`] or
/// [`LoggingError::FormatNotUnicode`] for unusable values.
pub fn format_from_env() -> Result<LogFormat, LoggingError> {
    format_from_var(env::var(FORMAT_VAR))
}

fn format_from_var(value: Result<String, env::VarError>) -> Result<LogFormat, LoggingError> {
    match value {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(env::VarError::NotUnicode(_)) => Err(LoggingError::FormatNotUnicode),
    }
}

/// Builds the event filter from `RUST_LOG`, or from [`DEFAULT_DIRECTIVES`]
/// when `rust_log` is absent or blank.
///
/// # Errors
/// Returns [`LoggingError::Filter`] when a directive does not parse.
pub fn filter_for(rust_log: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let directives = rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);
    Ok(EnvFilter::try_new(directives)?)
}

/// Installs the global subscriber and the `log` bridge.
///
/// Call once, before any other work; a second call fails with
/// [`LoggingError::LogBridge`].
///
/// # Errors
/// Returns [`LoggingError`] when the environment is unusable or a logger or
/// subscriber is already installed.
pub fn init_logging() -> Result<(), LoggingError> {
    let format = format_from_env()?;
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_for(rust_log.as_deref())?;

    let output = match format {
        LogFormat::Human => fmt::layer()
            .with_writer(io::stderr)
            .compact()
            .with_target(false)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .boxed(),
    };

    LogTracer::init().map_err(|err| LoggingError::LogBridge(err.to_string()))?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry().with(filter).with(output),
    )?;
    Ok(())
}
