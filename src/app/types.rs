//! Type definitions for the navigation shell.
//!
//! - [`Route`] - Every destination the app can show
//! - [`DrawerItem`] / [`DRAWER_ITEMS`] - Side menu entries
//! - [`BOTTOM_TABS`] - Bottom navigation bar entries
//! - [`SettingsField`] - Focusable rows of the settings dialog

/// A destination in the app. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Splash screen shown at startup.
    #[default]
    Welcome,
    Pizza,
    Gpa,
    /// Slider, checkbox and "Call me" button.
    Dial,
    Help,
    About,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Welcome,
        Route::Pizza,
        Route::Gpa,
        Route::Dial,
        Route::Help,
        Route::About,
    ];

    /// Stable route identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Route::Welcome => "welcome",
            Route::Pizza => "pizza",
            Route::Gpa => "gpa",
            Route::Dial => "screen3",
            Route::Help => "help_route",
            Route::About => "about_route",
        }
    }

    pub fn from_id(id: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.id() == id)
    }

    /// Title shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Pizza => "Pizza Party",
            Route::Gpa => "GPA Calculator",
            Route::Dial => "Screen 3",
            Route::Help => "Help & Support",
            Route::About => "About",
        }
    }

    /// Whether the bottom navigation bar belongs on this route.
    pub fn shows_bottom_bar(&self) -> bool {
        !matches!(self, Route::Welcome)
    }
}

/// One entry in the navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub const DRAWER_ITEMS: [DrawerItem; 6] = [
    DrawerItem {
        title: "Home",
        icon: "⌂",
        route: Route::Welcome,
    },
    DrawerItem {
        title: "Pizza Order",
        icon: "◔",
        route: Route::Pizza,
    },
    DrawerItem {
        title: "GPA Calculator",
        icon: "∑",
        route: Route::Gpa,
    },
    DrawerItem {
        title: "Settings",
        icon: "⚙",
        route: Route::Dial,
    },
    DrawerItem {
        title: "Help",
        icon: "?",
        route: Route::Help,
    },
    DrawerItem {
        title: "About",
        icon: "i",
        route: Route::About,
    },
];

/// Bottom navigation bar entries, left to right.
pub const BOTTOM_TABS: [(Route, &str); 3] = [
    (Route::Pizza, "Pizza"),
    (Route::Gpa, "GPA"),
    (Route::Dial, "Screen3"),
];

/// Rows of the settings dialog, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    DarkMode,
    Notifications,
    FontSize,
    Done,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::DarkMode => SettingsField::Notifications,
            SettingsField::Notifications => SettingsField::FontSize,
            SettingsField::FontSize => SettingsField::Done,
            SettingsField::Done => SettingsField::DarkMode,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SettingsField::DarkMode => SettingsField::Done,
            SettingsField::Notifications => SettingsField::DarkMode,
            SettingsField::FontSize => SettingsField::Notifications,
            SettingsField::Done => SettingsField::FontSize,
        }
    }
}

/// Modal settings dialog: whether it is up and which row has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsDialogState {
    open: bool,
    focus: SettingsField,
}

impl SettingsDialogState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focus(&self) -> SettingsField {
        self.focus
    }

    /// Opens with the first row focused.
    pub fn open(&mut self) {
        self.open = true;
        self.focus = SettingsField::default();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}
