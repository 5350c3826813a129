//! Button Component
//!
//! `[ Label ]`, inverted when focused.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{Palette, COLOR_ACCENT, COLOR_PRIMARY};

/// Styled single-line button.
pub fn button_line(label: &str, focused: bool, palette: &Palette) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.fg).bg(palette.input_bg)
    };
    Line::from(Span::styled(format!("[ {} ]", label), style))
}

/// Render a centered button in `area`.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, palette: &Palette) {
    let paragraph = Paragraph::new(button_line(label, focused, palette)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
