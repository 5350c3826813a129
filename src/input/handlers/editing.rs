//! Text field editing.

use crate::app::{ActiveScreen, App};
use crate::input::Command;

/// Handles typing and backspace in the focused text field.
pub fn handle_editing_command(app: &mut App, cmd: Command) -> bool {
    if !cmd.is_editing() || !app.shell.active().is_editing_text() {
        return false;
    }

    match (app.shell.active_mut(), cmd) {
        (ActiveScreen::Gpa(screen), Command::InsertChar(c)) => screen.insert_char(c),
        (ActiveScreen::Gpa(screen), Command::Backspace) => screen.backspace(),
        (ActiveScreen::Pizza(screen), Command::InsertChar(c)) => screen.insert_char(c),
        (ActiveScreen::Pizza(screen), Command::Backspace) => screen.backspace(),
        _ => return false,
    }
    app.reset_cursor();
    true
}

/// Bracketed paste goes into the focused text field, if there is one.
pub fn handle_paste(app: &mut App, text: &str) -> bool {
    if app.settings_dialog.is_open() || app.drawer.is_open() {
        return false;
    }
    let handled = match app.shell.active_mut() {
        ActiveScreen::Gpa(screen) if screen.is_editing_text() => {
            screen.insert_str(text);
            true
        }
        ActiveScreen::Pizza(screen) if screen.is_editing_text() => {
            screen.insert_str(text);
            true
        }
        _ => false,
    };
    if handled {
        app.reset_cursor();
    }
    handled
}
