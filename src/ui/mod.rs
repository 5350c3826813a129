//! UI rendering for Pizza Party
//!
//! Draws one frame from an [`AppViewState`]:
//! - Top app bar with the menu and settings affordances
//! - The active route's body
//! - Bottom navigation bar, when the route has one
//! - Drawer and settings dialog overlays on top
//!
//! ## Responsive Layout System
//!
//! Renderers size themselves through [`LayoutContext`]: `is_compact()` and
//! friends shrink the chrome and shorten labels on small terminals.

mod chrome;
pub mod components;
mod drawer;
pub mod layout;
mod screens;
mod settings_dialog;
pub mod theme;

pub use layout::{centered_rect, LayoutContext};
pub use theme::Palette;

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::view_state::{AppViewState, ScreenView};
use chrome::{render_bottom_bar, render_top_bar};
use drawer::render_drawer;
use screens::{
    render_about_screen, render_dial_screen, render_gpa_screen, render_help_screen,
    render_pizza_screen, render_welcome_screen,
};
use settings_dialog::render_settings_dialog;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame.
pub fn render(frame: &mut Frame, view: &AppViewState<'_>) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let palette = Palette::for_mode(view.dark_mode());

    let bottom_height = if view.bottom_tabs.is_some() {
        ctx.bottom_bar_height()
    } else {
        0
    };
    let [top, body, bottom] = Layout::vertical([
        Constraint::Length(ctx.top_bar_height()),
        Constraint::Min(0),
        Constraint::Length(bottom_height),
    ])
    .areas(area);

    render_top_bar(frame, top, view.title, view.route);

    // The caret only blinks while nothing is stacked on top of the form.
    let cursor_visible = view.cursor_visible && !view.has_overlay();
    match &view.screen {
        ScreenView::Welcome => render_welcome_screen(frame, body, &palette),
        ScreenView::Pizza(pizza) => {
            render_pizza_screen(frame, body, pizza, cursor_visible, &palette)
        }
        ScreenView::Gpa(gpa) => render_gpa_screen(frame, body, gpa, cursor_visible, &palette),
        ScreenView::Dial(dial) => render_dial_screen(frame, body, dial, &palette),
        ScreenView::Help => render_help_screen(frame, body, &palette),
        ScreenView::About => render_about_screen(frame, body, &palette),
    }

    if let Some(tabs) = view.bottom_tabs {
        render_bottom_bar(frame, bottom, tabs, view.active_tab(), &palette);
    }

    if let Some(drawer) = &view.drawer {
        render_drawer(frame, area, drawer, &palette);
    }
    if let Some(dialog) = &view.settings_dialog {
        render_settings_dialog(frame, area, dialog, &palette);
    }
}
