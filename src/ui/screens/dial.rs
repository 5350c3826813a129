use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, LineGauge, Paragraph},
    Frame,
};

use super::form_column;
use crate::ui::components::render_button;
use crate::ui::theme::{Palette, COLOR_ACCENT, COLOR_DIAL_BOTTOM, COLOR_DIAL_TOP};
use crate::view_state::{DialFocus, DialView};

pub fn render_dial_screen(frame: &mut Frame, area: Rect, view: &DialView, palette: &Palette) {
    // Two-band stand-in for the vertical gradient
    let [top, bottom] = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);
    frame.render_widget(Block::default().style(Style::default().bg(COLOR_DIAL_TOP)), top);
    frame.render_widget(Block::default().style(Style::default().bg(COLOR_DIAL_BOTTOM)), bottom);

    let column = form_column(area);
    let rows = Layout::vertical([
        Constraint::Length(1), // slider
        Constraint::Length(1),
        Constraint::Length(1), // value
        Constraint::Length(1),
        Constraint::Length(1), // call
        Constraint::Length(1),
        Constraint::Length(1), // checkbox
        Constraint::Min(0),
    ])
    .split(column);

    let slider_focused = view.focus == DialFocus::Slider;
    let filled = match (view.slider_enabled, slider_focused) {
        (false, _) => Color::Gray,
        (true, true) => COLOR_ACCENT,
        (true, false) => Color::White,
    };
    let gauge = LineGauge::default()
        .ratio(f64::from(view.slider).clamp(0.0, 1.0))
        .label(if slider_focused { "\u{25C0}\u{25B6} " } else { "   " })
        .filled_style(Style::default().fg(filled))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, rows[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            view.slider_label.clone(),
            Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[2],
    );

    render_button(frame, rows[4], "Call me", view.focus == DialFocus::Call, palette);

    let mark = if view.slider_enabled { "x" } else { " " };
    let checkbox_style = if view.focus == DialFocus::Checkbox {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("[{}] Slider enabled", mark),
            checkbox_style,
        )))
        .alignment(Alignment::Center),
        rows[6],
    );
}
