//! File logging for the terminal explorer.
//!
//! The terminal UI owns stdout, so events are only recorded when a log file
//! is configured. Writes go through a non-blocking appender whose guard must
//! be held until the program exits.

use camino::Utf8PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ExplorerConfig;
use crate::github::error::ExplorerError;

/// Installs the global subscriber when `log_file` is configured.
///
/// `RUST_LOG` overrides the configured `log_filter` directive. Returns the
/// appender guard, or `None` when logging stays disabled.
///
/// # Errors
///
/// Returns [`ExplorerError::Configuration`] when the log path has no file
/// name, the filter directive cannot be parsed, or a global subscriber is
/// already installed.
pub fn init_logging(config: &ExplorerConfig) -> Result<Option<WorkerGuard>, ExplorerError> {
    let Some(log_file) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let path = Utf8PathBuf::from(log_file);
    let file_name = path
        .file_name()
        .ok_or_else(|| ExplorerError::Configuration {
            message: format!("log_file {log_file:?} does not name a file"),
        })?
        .to_owned();
    let directory = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .map_or_else(|| Utf8PathBuf::from("."), Utf8PathBuf::from);

    let filter = build_filter(&config.log_filter)?;

    let appender = tracing_appender::rolling::never(directory.as_std_path(), file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
        .try_init()
        .map_err(|error| ExplorerError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })?;

    tracing::info!(path = %path, "file logging enabled");
    Ok(Some(guard))
}

/// Builds the event filter, preferring `RUST_LOG` over `directive`.
fn build_filter(directive: &str) -> Result<EnvFilter, ExplorerError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|error| ExplorerError::Configuration {
        message: format!("log_filter {directive:?} is invalid: {error}"),
    })
}
