//! CLI module for Pizza Party.
//!
//! - Argument parsing into a [`CliCommand`]
//! - `--version` and `--help` output
//!
//! # Usage
//!
//! Call the dispatcher early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use pizza_party::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! // Version and Help print and exit; anything else yields the TUI config.
//! let config = run_cli_command(command);
//! ```

pub mod args;
pub mod help;
pub mod version;

pub use args::{parse_args, parse_args_with, CliCommand};
pub use help::{handle_help_command, HELP_TEXT};
pub use version::{handle_version_command, VERSION};

use crate::startup::StartupConfig;

/// Run a CLI command.
///
/// `Version` and `Help` print and exit the process. `RunTui` hands back its
/// startup configuration for the caller to launch the TUI with.
pub fn run_cli_command(command: CliCommand) -> StartupConfig {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(config) => config,
    }
}
