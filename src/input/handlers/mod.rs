//! Command handlers.
//!
//! [`execute_command`] is the single entry point. Each layer gets the command
//! in z-order and the first one that handles it wins:
//!
//! - [`navigation`] - quit, drawer, tabs, back
//! - [`overlays`] - drawer list and settings dialog
//! - [`screens`] - controls on the active screen
//! - [`editing`] - text fields and paste

pub mod editing;
pub mod navigation;
pub mod overlays;
pub mod screens;

pub use editing::{handle_editing_command, handle_paste};
pub use navigation::handle_navigation_command;
pub use overlays::{handle_drawer_command, handle_settings_command};
pub use screens::handle_screen_command;

use crate::app::App;
use crate::input::Command;

/// Run `cmd` against the app. Returns `true` if anything handled it.
pub fn execute_command(app: &mut App, cmd: Command) -> bool {
    if handle_navigation_command(app, cmd) {
        return true;
    }
    if app.settings_dialog.is_open() {
        return handle_settings_command(app, cmd);
    }
    if app.drawer.is_open() {
        return handle_drawer_command(app, cmd);
    }
    if handle_editing_command(app, cmd) {
        return true;
    }
    handle_screen_command(app, cmd)
}
