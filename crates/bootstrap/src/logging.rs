//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::BootstrapConfig;

pub const LOG_FILE_NAME: &str = "world-store.log";

/// Keeps the file writer alive. Dropping it flushes and stops file logging.
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber: stderr always, plus a log file when
/// `config.log_dir` is set.
///
/// Fails if the filter is invalid, the log directory cannot be created, or a
/// global subscriber is already installed.
pub fn init_logging(config: &BootstrapConfig) -> Result<LoggingGuard> {
    let env_filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?;

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    if let Some(dir) = &config.log_dir {
        tracing::info!("Log file: {}", dir.join(LOG_FILE_NAME).display());
    }

    Ok(LoggingGuard { _file: guard })
}
