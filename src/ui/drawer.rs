//! Slide-in navigation drawer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{Palette, COLOR_ACCENT};
use crate::view_state::DrawerView;

pub fn render_drawer(frame: &mut Frame, area: Rect, drawer: &DrawerView, palette: &Palette) {
    let ctx = LayoutContext::from_rect(area);
    let panel = Rect {
        width: ctx.drawer_width().min(area.width),
        ..area
    };
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", drawer.title),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg).fg(palette.fg));

    let mut lines = Vec::with_capacity(drawer.items.len() * 2);
    for (idx, item) in drawer.items.iter().enumerate() {
        let selected = idx == drawer.selected;
        let (marker, style) = if selected {
            (
                "\u{25B6} ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(palette.fg))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{}  {}", item.icon, item.title), style),
        ]));
        if !ctx.is_short() {
            lines.push(Line::raw(""));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), panel);
}
