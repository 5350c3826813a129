//! Which set of key bindings is live.

use crate::app::App;

/// The layer currently receiving keys, from the top of the z-order down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputContext {
    /// Settings dialog is open.
    SettingsDialog,
    /// Navigation drawer is open.
    Drawer,
    /// A text field on the active screen has focus.
    TextEntry,
    /// Any other control on the active screen has focus.
    Screen,
}

impl InputContext {
    pub fn from_app(app: &App) -> Self {
        if app.settings_dialog.is_open() {
            InputContext::SettingsDialog
        } else if app.drawer.is_open() {
            InputContext::Drawer
        } else if app.shell.active().is_editing_text() {
            InputContext::TextEntry
        } else {
            InputContext::Screen
        }
    }

    /// Whether plain characters are typed rather than interpreted.
    pub fn accepts_text(&self) -> bool {
        matches!(self, InputContext::TextEntry)
    }
}
