//! Startup configuration.
//!
//! Everything the binary needs to know before the terminal is taken over:
//! initial settings, the first route, tick rate and where logs go.
//!
//! # Usage
//!
//! ```
//! use pizza_party::startup::StartupConfig;
//!
//! let config = StartupConfig::from_env().with_logging_enabled(false);
//! assert!(!config.logging_enabled);
//! ```

pub mod config;

pub use config::{StartupConfig, DEFAULT_LOG_FILTER, DEFAULT_TICK_RATE_MS, LOG_DIR_ENV, LOG_FILTER_ENV};
