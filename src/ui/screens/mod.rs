//! Body renderers, one per route.

mod dial;
mod gpa;
mod info;
mod pizza;
mod welcome;

pub use dial::render_dial_screen;
pub use gpa::render_gpa_screen;
pub use info::{render_about_screen, render_help_screen};
pub use pizza::render_pizza_screen;
pub use welcome::render_welcome_screen;

use ratatui::layout::Rect;

use crate::ui::layout::LayoutContext;

/// Centered form column inside `area`, with a one-row top margin.
pub(crate) fn form_column(area: Rect) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let width = ctx.form_width().min(area.width);
    let top = if ctx.is_extra_small() { 0 } else { 1 };
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + top.min(area.height),
        width,
        height: area.height.saturating_sub(top),
    }
}
