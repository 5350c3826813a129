//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to `<log_dir>/pizza-party.log`
//! with ANSI colors off. The filter comes from `PIZZA_PARTY_LOG` via
//! [`StartupConfig::log_filter`].

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};
use crate::startup::{StartupConfig, DEFAULT_LOG_FILTER};

pub const LOG_FILE_NAME: &str = "pizza-party.log";

/// Install the global subscriber.
///
/// Returns the log file path, or `None` when logging is disabled or no log
/// directory could be determined.
pub fn init_logging(config: &StartupConfig) -> AppResult<Option<PathBuf>> {
    if !config.logging_enabled {
        return Ok(None);
    }
    let Some(dir) = config.resolved_log_dir() else {
        return Ok(None);
    };

    let (path, file) = open_log_file(&dir)?;

    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|_| AppError::LoggingAlreadyInitialized)?;

    tracing::info!("Logging to {}", path.display());
    Ok(Some(path))
}

/// Parse a filter directive, falling back to the default on bad input.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Create `dir` if needed and open the log file for appending.
pub fn open_log_file(dir: &Path) -> AppResult<(PathBuf, File)> {
    let path = dir.join(LOG_FILE_NAME);
    let to_error = |source| AppError::Logging {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(to_error)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(to_error)?;
    Ok((path, file))
}
