//! Aggregate view state handed to `ui::render`.

use crate::app::{DrawerItem, Route, SettingsField, BOTTOM_TABS, DRAWER_ITEMS};
use crate::settings::AppSettings;

use super::{DialView, GpaView, PizzaView};

/// What the body of the current route looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView<'a> {
    Welcome,
    Pizza(PizzaView<'a>),
    Gpa(GpaView<'a>),
    Dial(DialView),
    Help,
    About,
}

/// Open navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerView {
    pub title: &'static str,
    pub items: &'static [DrawerItem],
    pub selected: usize,
}

impl DrawerView {
    pub fn new(selected: usize) -> Self {
        Self {
            title: "Menu",
            items: &DRAWER_ITEMS,
            selected,
        }
    }
}

/// Open settings dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsDialogView {
    pub focus: SettingsField,
    pub dark_mode: bool,
    pub notifications: bool,
    pub font_size: f32,
    pub font_size_label: &'static str,
}

impl SettingsDialogView {
    pub fn new(settings: &AppSettings, focus: SettingsField) -> Self {
        Self {
            focus,
            dark_mode: settings.dark_mode(),
            notifications: settings.notifications(),
            font_size: settings.font_size(),
            font_size_label: settings.font_size_label(),
        }
    }
}

/// Everything a frame needs, borrowed from the app.
///
/// The UI imports this instead of `App`, so rendering is a pure function of
/// data and can be driven from tests and benchmarks without an event loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewState<'a> {
    pub title: &'static str,
    pub route: Route,
    pub screen: ScreenView<'a>,
    /// `None` when the shell hides the bottom bar
    pub bottom_tabs: Option<&'static [(Route, &'static str)]>,
    pub drawer: Option<DrawerView>,
    pub settings_dialog: Option<SettingsDialogView>,
    pub settings: AppSettings,
    /// Caret visibility for the focused text field
    pub cursor_visible: bool,
    pub tick_count: u64,
}

impl AppViewState<'_> {
    pub fn dark_mode(&self) -> bool {
        self.settings.dark_mode()
    }

    pub fn has_overlay(&self) -> bool {
        self.drawer.is_some() || self.settings_dialog.is_some()
    }

    /// Index into [`BOTTOM_TABS`] of the current route, if it has a tab.
    pub fn active_tab(&self) -> Option<usize> {
        BOTTOM_TABS.iter().position(|(route, _)| *route == self.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_view() -> AppViewState<'static> {
        AppViewState {
            title: "Pizza Party App",
            route: Route::Help,
            screen: ScreenView::Help,
            bottom_tabs: Some(&BOTTOM_TABS),
            drawer: None,
            settings_dialog: None,
            settings: AppSettings::default(),
            cursor_visible: true,
            tick_count: 0,
        }
    }

    #[test]
    fn test_active_tab_only_for_tab_routes() {
        let mut view = base_view();
        assert_eq!(view.active_tab(), None);
        view.route = Route::Dial;
        assert_eq!(view.active_tab(), Some(2));
    }

    #[test]
    fn test_has_overlay() {
        let mut view = base_view();
        assert!(!view.has_overlay());
        view.drawer = Some(DrawerView::new(0));
        assert!(view.has_overlay());
    }

    #[test]
    fn test_settings_dialog_view_copies_settings() {
        let mut settings = AppSettings::default();
        settings.set_font_size(2.0);
        let view = SettingsDialogView::new(&settings, SettingsField::FontSize);
        assert_eq!(view.font_size_label, "Large");
        assert!(view.notifications);
        assert!(!view.dark_mode);
    }
}
