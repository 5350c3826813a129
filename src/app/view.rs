//! View state construction for UI rendering.

use super::navigation::ActiveScreen;
use super::types::BOTTOM_TABS;
use super::{App, APP_TITLE};
use crate::view_state::{AppViewState, DrawerView, ScreenView, SettingsDialogView};

impl App {
    /// Create a view state for UI rendering.
    ///
    /// Borrows the text inputs instead of cloning them, so the result must be
    /// dropped before the app is mutated again.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let view = app.view_state();
    /// terminal.draw(|f| ui::render(f, &view))?;
    /// ```
    pub fn view_state(&self) -> AppViewState<'_> {
        let screen = match self.shell.active() {
            ActiveScreen::Welcome => ScreenView::Welcome,
            ActiveScreen::Pizza(screen) => ScreenView::Pizza(screen.view()),
            ActiveScreen::Gpa(screen) => ScreenView::Gpa(screen.view()),
            ActiveScreen::Dial(screen) => ScreenView::Dial(screen.view()),
            ActiveScreen::Help => ScreenView::Help,
            ActiveScreen::About => ScreenView::About,
        };

        AppViewState {
            title: APP_TITLE,
            route: self.shell.current_route(),
            screen,
            bottom_tabs: self.show_bottom_bar.then_some(&BOTTOM_TABS[..]),
            drawer: self
                .drawer
                .is_open()
                .then(|| DrawerView::new(self.drawer.selected())),
            settings_dialog: self
                .settings_dialog
                .is_open()
                .then(|| SettingsDialogView::new(&self.settings, self.settings_dialog.focus())),
            settings: self.settings,
            cursor_visible: self.cursor_blink.is_visible(),
            tick_count: self.tick_count,
        }
    }
}
