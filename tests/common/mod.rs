//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, dialer) = app_on(Route::Gpa);
//! type_str(&mut app, "85");
//! let screen = render_to_string(&app, 80, 24);
//! ```

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pizza_party::adapters::mock::RecordingDialer;
use pizza_party::app::{App, Route};
use pizza_party::startup::StartupConfig;
use pizza_party::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// App on `route` with a recording dialer the test keeps a handle to.
pub fn app_on(route: Route) -> (App, RecordingDialer) {
    app_with(StartupConfig::default().with_initial_route(route))
}

pub fn app_with(config: StartupConfig) -> (App, RecordingDialer) {
    let dialer = RecordingDialer::new();
    let app = App::with_config_and_dialer(&config, Box::new(dialer.clone()));
    (app, dialer)
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn press_ctrl(app: &mut App, c: char) -> bool {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render one frame into a `TestBackend` and return the buffer.
pub fn render(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, &app.view_state())).unwrap();
    terminal.backend().buffer().clone()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    buffer_text(&render(app, width, height))
}
