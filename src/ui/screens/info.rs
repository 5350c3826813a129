//! Static Help and About pages.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Palette;

pub const HELP_TITLE: &str = "Help & Support";
pub const HELP_BODY: &str = "This is the help screen where you can add FAQs and support information.";

pub const ABOUT_TITLE: &str = "About";

fn about_body() -> String {
    format!("Pizza Party App v{}\nBuilt with ratatui", env!("CARGO_PKG_VERSION"))
}

pub fn render_help_screen(frame: &mut Frame, area: Rect, palette: &Palette) {
    render_page(frame, area, palette, HELP_TITLE, HELP_BODY);
}

pub fn render_about_screen(frame: &mut Frame, area: Rect, palette: &Palette) {
    render_page(frame, area, palette, ABOUT_TITLE, &about_body());
}

fn render_page(frame: &mut Frame, area: Rect, palette: &Palette, title: &str, body: &str) {
    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(
        body.lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(palette.fg)))),
    );

    let block = Block::default()
        .padding(Padding::uniform(1))
        .style(Style::default().bg(palette.bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
