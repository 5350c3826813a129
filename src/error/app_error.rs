//! Unified error type for the application.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Type alias for results using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Everything that can go wrong outside of the calculators.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing, or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened.
    #[error("failed to open log file {path:?}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("logging already initialized")]
    LoggingAlreadyInitialized,

    /// A command-line flag carried a value that could not be used.
    #[error("invalid value {value:?} for {flag}")]
    InvalidArgument { flag: String, value: String },

    /// A command-line flag that takes a value was given none.
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    /// The host refused to start a call.
    #[error("could not dial {number}: {message}")]
    Dial { number: String, message: String },
}

impl AppError {
    /// Short message suitable for printing before exit.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Terminal(_) => {
                "Failed to drive the terminal. Please check your terminal settings.".to_string()
            }
            AppError::Logging { path, .. } => {
                format!("Could not write logs to {}. Try --log-dir or --no-log.", path.display())
            }
            AppError::LoggingAlreadyInitialized => "Logging was already set up.".to_string(),
            AppError::InvalidArgument { flag, value } => {
                format!("'{}' is not a valid value for {}. See --help.", value, flag)
            }
            AppError::MissingValue { flag } => format!("{} needs a value. See --help.", flag),
            AppError::Dial { number, .. } => format!("Could not place a call to {}.", number),
        }
    }

    /// Whether the error came from bad user input on the command line.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidArgument { .. } | AppError::MissingValue { .. }
        )
    }
}
