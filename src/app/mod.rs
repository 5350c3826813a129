//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Route`] - Which screen is currently displayed
//! - [`NavigationShell`] - Active screen controller plus back stack
//! - [`DrawerState`] / [`SettingsDialogState`] - Overlays
//! - [`CursorBlinkState`] - Caret blink timing

mod cursor_blink;
mod navigation;
mod types;
mod view;

pub use cursor_blink::CursorBlinkState;
pub use navigation::{ActiveScreen, DrawerState, NavigationShell, MAX_BACK_STACK};
pub use types::{
    DrawerItem, Route, SettingsDialogState, SettingsField, BOTTOM_TABS, DRAWER_ITEMS,
};

use crossterm::event::KeyEvent;

use crate::adapters::SystemDialer;
use crate::input::handlers::{execute_command, handle_paste};
use crate::input::{CommandRegistry, InputContext};
use crate::settings::AppSettings;
use crate::startup::StartupConfig;
use crate::traits::Dialer;

/// Title shown in the top app bar.
pub const APP_TITLE: &str = "Pizza Party App";

/// Main application state
pub struct App {
    /// Active route, its controller and the back stack
    pub shell: NavigationShell,
    /// Process-wide display preferences, seeded from the CLI
    pub settings: AppSettings,
    /// Side navigation drawer
    pub drawer: DrawerState,
    /// Modal settings dialog
    pub settings_dialog: SettingsDialogState,
    /// Mirrors what the shell last reported for the bottom bar
    pub show_bottom_bar: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for animations (blinking cursor)
    pub tick_count: u64,
    pub cursor_blink: CursorBlinkState,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    /// Key map
    pub registry: CommandRegistry,
    /// Launches the phone call from the dial screen
    pub dialer: Box<dyn Dialer>,
}

impl App {
    /// Create a new App with default settings on the welcome route.
    pub fn new() -> Self {
        Self::with_config(&StartupConfig::default())
    }

    /// Create an App from startup configuration, dialing through the OS.
    pub fn with_config(config: &StartupConfig) -> Self {
        Self::with_config_and_dialer(config, Box::new(SystemDialer::new()))
    }

    /// Create an App with an injected dialer (tests use a recording one).
    pub fn with_config_and_dialer(config: &StartupConfig, dialer: Box<dyn Dialer>) -> Self {
        let shell = NavigationShell::new(config.initial_route);
        let show_bottom_bar = config.initial_route.shows_bottom_bar();
        tracing::info!("Starting on route '{}'", config.initial_route.id());

        Self {
            shell,
            settings: config.settings,
            drawer: DrawerState::default(),
            settings_dialog: SettingsDialogState::default(),
            show_bottom_bar,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            cursor_blink: CursorBlinkState::new(),
            terminal_width: 80,
            terminal_height: 24,
            registry: CommandRegistry::new(),
            dialer,
        }
    }

    pub fn current_route(&self) -> Route {
        self.shell.current_route()
    }

    /// Resolve a key press in the current context and run it.
    ///
    /// Returns `true` if the key did something.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let context = InputContext::from_app(self);
        let Some(command) = self.registry.dispatch(key, context) else {
            return false;
        };
        tracing::debug!("{:?} in {:?} -> {:?}", key.code, context, command);
        let handled = execute_command(self, command);
        if handled {
            self.mark_dirty();
        }
        handled
    }

    /// Bracketed paste into the focused text field.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        let handled = handle_paste(self, text);
        if handled {
            self.mark_dirty();
        }
        handled
    }

    /// Advance the tick counter and the caret blink.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.shell.active().is_editing_text()
            && !self.drawer.is_open()
            && !self.settings_dialog.is_open()
            && self.cursor_blink.update(self.tick_count)
        {
            self.mark_dirty();
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Show the caret solid again after input or a focus change.
    pub fn reset_cursor(&mut self) {
        self.cursor_blink.reset(self.tick_count);
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    /// Record a resize. Same-size updates don't trigger a redraw.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if (width, height) == (self.terminal_width, self.terminal_height) {
            return;
        }
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
