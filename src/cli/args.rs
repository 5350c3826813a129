//! Command-line argument parsing.
//!
//! Flags seed a [`StartupConfig`]; they never persist anything.

use crate::app::Route;
use crate::error::{AppError, AppResult};
use crate::startup::StartupConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(StartupConfig),
}

/// Parse arguments on top of [`StartupConfig::from_env`].
///
/// # Examples
///
/// ```
/// use pizza_party::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pizza-party".to_string(), "--version".to_string()];
/// assert!(matches!(parse_args(args.into_iter()).unwrap(), CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> AppResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    parse_args_with(args, StartupConfig::from_env())
}

/// Parse arguments on top of an explicit base configuration.
///
/// Unknown flags are ignored. `--version` and `--help` win as soon as they
/// are seen.
pub fn parse_args_with<I>(args: I, base: StartupConfig) -> AppResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut config = base;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg, None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--dark" => config.settings.set_dark_mode(true),
            "--no-notifications" => config.settings.set_notifications(false),
            "--no-log" => config.logging_enabled = false,
            "--font-size" => {
                let value = take_value(&flag, inline_value, &mut args)?;
                let size = parse_font_size(&value).ok_or_else(|| AppError::InvalidArgument {
                    flag: flag.clone(),
                    value: value.clone(),
                })?;
                config.settings.set_font_size(size);
            }
            "--route" => {
                let value = take_value(&flag, inline_value, &mut args)?;
                let route = Route::from_id(&value).ok_or_else(|| AppError::InvalidArgument {
                    flag: flag.clone(),
                    value: value.clone(),
                })?;
                config = config.with_initial_route(route);
            }
            "--log-dir" => {
                let value = take_value(&flag, inline_value, &mut args)?;
                config = config.with_log_dir(value);
            }
            _ => {}
        }
    }

    Ok(CliCommand::RunTui(config))
}

fn take_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> AppResult<String>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .filter(|value| !value.is_empty() && !value.starts_with("--"))
        .ok_or_else(|| AppError::MissingValue {
            flag: flag.to_string(),
        })
}

fn parse_font_size(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|size| size.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> AppResult<CliCommand> {
        let args: Vec<String> = std::iter::once("pizza-party")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args_with(args.into_iter(), StartupConfig::default())
    }

    fn config(args: &[&str]) -> StartupConfig {
        match parse(args).unwrap() {
            CliCommand::RunTui(config) => config,
            other => panic!("expected RunTui, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_version_flag() {
        assert!(matches!(parse(&["--version"]).unwrap(), CliCommand::Version));
        assert!(matches!(parse(&["-V"]).unwrap(), CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert!(matches!(parse(&["-h"]).unwrap(), CliCommand::Help));
        assert!(matches!(parse(&["--dark", "--help"]).unwrap(), CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        let config = config(&[]);
        assert!(!config.settings.dark_mode());
        assert!(config.settings.notifications());
        assert_eq!(config.settings.font_size(), 1.0);
        assert_eq!(config.initial_route, Route::Welcome);
    }

    #[test]
    fn test_parse_settings_flags() {
        let config = config(&["--dark", "--no-notifications", "--font-size", "1.5"]);
        assert!(config.settings.dark_mode());
        assert!(!config.settings.notifications());
        assert_eq!(config.settings.font_size(), 1.5);
    }

    #[test]
    fn test_font_size_is_clamped() {
        assert_eq!(config(&["--font-size=9"]).settings.font_size(), 2.0);
        assert_eq!(config(&["--font-size", "0.1"]).settings.font_size(), 0.5);
    }

    #[test]
    fn test_invalid_font_size() {
        for bad in ["big", "NaN", "inf"] {
            let err = parse(&["--font-size", bad]).unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_parse_route() {
        assert_eq!(config(&["--route", "gpa"]).initial_route, Route::Gpa);
        assert_eq!(config(&["--route=screen3"]).initial_route, Route::Dial);
        let err = parse(&["--route", "kitchen"]).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument { ref value, .. } if value == "kitchen"));
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--route"]).unwrap_err();
        assert!(matches!(err, AppError::MissingValue { ref flag } if flag == "--route"));
        let err = parse(&["--log-dir", "--dark"]).unwrap_err();
        assert!(matches!(err, AppError::MissingValue { .. }));
    }

    #[test]
    fn test_logging_flags() {
        let config = config(&["--no-log", "--log-dir", "/tmp/pp"]);
        assert!(!config.logging_enabled);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/pp")));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(matches!(parse(&["--unknown"]).unwrap(), CliCommand::RunTui(_)));
    }
}
