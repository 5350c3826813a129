//! Startup configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::app::Route;
use crate::settings::AppSettings;

/// Env var holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "PIZZA_PARTY_LOG";
/// Env var overriding the log directory.
pub const LOG_DIR_ENV: &str = "PIZZA_PARTY_LOG_DIR";

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Configuration for a TUI session.
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```
/// use pizza_party::app::Route;
/// use pizza_party::startup::StartupConfig;
///
/// let config = StartupConfig::default()
///     .with_initial_route(Route::Gpa)
///     .with_tick_rate_ms(100);
/// assert_eq!(config.initial_route, Route::Gpa);
/// ```
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Settings the app starts with. Never persisted.
    pub settings: AppSettings,
    /// First route on screen (default: welcome)
    pub initial_route: Route,
    /// Tick interval in milliseconds (default: 250)
    pub tick_rate_ms: u64,
    /// Write a log file at all
    pub logging_enabled: bool,
    /// `EnvFilter` directive (default: "info")
    pub log_filter: String,
    /// Directory for `pizza-party.log`. `None` means the platform data dir.
    pub log_dir: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            initial_route: Route::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            logging_enabled: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_initial_route(mut self, route: Route) -> Self {
        self.initial_route = route;
        self
    }

    /// Zero is bumped to one so the tick interval never spins.
    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms.max(1);
        self
    }

    pub fn with_logging_enabled(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Log directory, falling back to `<data_local_dir>/pizza-party`.
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join("pizza-party")))
    }

    /// Defaults overlaid with `PIZZA_PARTY_LOG` and `PIZZA_PARTY_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_dir(dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.initial_route, Route::Welcome);
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.logging_enabled);
        assert_eq!(config.log_filter, "info");
        assert!(config.log_dir.is_none());
        assert_eq!(config.settings, AppSettings::default());
    }

    #[test]
    fn test_startup_config_builder() {
        let mut settings = AppSettings::default();
        settings.set_dark_mode(true);
        let config = StartupConfig::new()
            .with_settings(settings)
            .with_initial_route(Route::Dial)
            .with_tick_rate_ms(0)
            .with_logging_enabled(false)
            .with_log_filter("debug")
            .with_log_dir("/tmp/pp");

        assert!(config.settings.dark_mode());
        assert_eq!(config.initial_route, Route::Dial);
        assert_eq!(config.tick_rate_ms, 1);
        assert!(!config.logging_enabled);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.resolved_log_dir(), Some(PathBuf::from("/tmp/pp")));
    }

    #[test]
    fn test_from_vars_reads_overrides() {
        let config = StartupConfig::from_vars(|key| match key {
            LOG_FILTER_ENV => Some("pizza_party=trace".to_string()),
            LOG_DIR_ENV => Some("/var/log/pp".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter, "pizza_party=trace");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/pp")));
    }

    #[test]
    fn test_from_vars_ignores_blank_values() {
        let config = StartupConfig::from_vars(|_| Some("  ".to_string()));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.log_dir.is_none());
    }
}
