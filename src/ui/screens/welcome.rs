use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::ui::components::button_line;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{Palette, COLOR_PRIMARY};

pub fn render_welcome_screen(frame: &mut Frame, area: Rect, palette: &Palette) {
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Pizza Party!",
            Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Plan the pizza order, check your GPA, or give us a call.",
            Style::default().fg(palette.fg),
        )),
        Line::raw(""),
        button_line("Get Started", true, palette),
        Line::raw(""),
        Line::from(Span::styled(
            "Enter to start \u{2022} Ctrl+O menu \u{2022} q quit",
            Style::default().fg(palette.dim),
        )),
    ];

    let height = lines.len() as u16;
    let body = centered_rect(area, area.width.saturating_sub(4), height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}
