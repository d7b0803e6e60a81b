//! Logging initialisation for the `kruskal` binary.
//!
//! Installs a global `tracing` subscriber writing to stderr and bridges the
//! `log` facade so dependencies using either API end up in the same stream.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::{LogTracer, log::SetLoggerError};
use tracing_subscriber::{EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt};

const LOG_FORMAT_ENV: &str = "KRUSKAL_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line, including the active span list.
    Json,
}

impl LogFormat {
    /// Reads the format from `KRUSKAL_LOG_FORMAT`, defaulting to
    /// [`LogFormat::Human`] when unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not valid Unicode or names
    /// an unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable held invalid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `KRUSKAL_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
}

/// Reasons the global subscriber or the `log` bridge could not be installed.
#[derive(Debug, Error)]
enum InstallError {
    #[error("a global tracing subscriber is already set: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
    #[error("a global `log` logger is already set: {0}")]
    LogBridge(#[from] SetLoggerError),
}

/// Installs global structured logging once per process.
///
/// `RUST_LOG` selects the filter (default `info`) and `KRUSKAL_LOG_FORMAT`
/// selects `human` or `json` output. Diagnostics go to stderr so the summary
/// on stdout stays machine-readable. If another subscriber already owns the
/// global slot it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] if `KRUSKAL_LOG_FORMAT` is malformed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let format = LogFormat::from_env()?;
    if let Err(err) = install_subscriber(format) {
        report_install_failure(&err);
    }
    let _ = INSTALLED.set(());
    Ok(())
}

fn install_subscriber(format: LogFormat) -> Result<(), InstallError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    // `set_global_default` leaves the `log` facade alone, so the bridge is
    // installed exactly once here.
    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;
    Ok(())
}

#[expect(
    clippy::print_stderr,
    reason = "no subscriber of ours is available to carry this diagnostic"
)]
fn report_install_failure(err: &InstallError) {
    eprintln!("structured logging already configured elsewhere: {err}");
}
