//! Drawer and settings dialog commands.

use crate::app::{App, SettingsField};
use crate::input::Command;

pub fn handle_drawer_command(app: &mut App, cmd: Command) -> bool {
    match cmd {
        Command::Up | Command::FocusPrev => app.drawer.select_previous(),
        Command::Down | Command::FocusNext => app.drawer.select_next(),
        Command::Activate | Command::Increase => app.select_drawer_item(),
        Command::Decrease => app.drawer.close(),
        _ => return false,
    }
    true
}

pub fn handle_settings_command(app: &mut App, cmd: Command) -> bool {
    let field = app.settings_dialog.focus();
    match cmd {
        Command::Up | Command::FocusPrev => app.settings_dialog.focus_previous(),
        Command::Down | Command::FocusNext => app.settings_dialog.focus_next(),
        Command::Increase if field == SettingsField::FontSize => {
            app.settings.step_font_size_up()
        }
        Command::Decrease if field == SettingsField::FontSize => {
            app.settings.step_font_size_down()
        }
        Command::Activate | Command::Toggle => match field {
            SettingsField::DarkMode => app.settings.toggle_dark_mode(),
            SettingsField::Notifications => app.settings.toggle_notifications(),
            SettingsField::FontSize => {
                if cmd == Command::Activate {
                    app.settings_dialog.focus_next();
                }
            }
            SettingsField::Done => app.settings_dialog.close(),
        },
        _ => return false,
    }
    true
}
