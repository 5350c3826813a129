//! Global navigation commands.

use crate::app::App;
use crate::input::Command;

/// Handles commands that work regardless of what has focus.
///
/// Overlays swallow drawer/tab switching while they are open so the user
/// can't navigate out from under a dialog.
pub fn handle_navigation_command(app: &mut App, cmd: Command) -> bool {
    match cmd {
        Command::Quit => {
            app.quit();
            true
        }
        Command::Back => {
            if app.settings_dialog.is_open() {
                app.settings_dialog.close();
            } else if app.drawer.is_open() {
                app.drawer.close();
            } else {
                app.navigate_back();
            }
            true
        }
        Command::OpenSettings => {
            if !app.drawer.is_open() {
                app.settings_dialog.open();
            }
            true
        }
        Command::ToggleDrawer => {
            if !app.settings_dialog.is_open() {
                app.toggle_drawer();
            }
            true
        }
        Command::NextTab | Command::PrevTab => {
            if !app.settings_dialog.is_open() && !app.drawer.is_open() {
                app.cycle_tab(cmd == Command::NextTab);
            }
            true
        }
        _ => false,
    }
}
