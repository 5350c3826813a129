//! Top app bar and bottom navigation bar.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::layout::LayoutContext;
use super::theme::{Palette, COLOR_ON_PRIMARY, COLOR_PRIMARY};
use crate::app::Route;

/// Menu glyph on the left, settings glyph on the right.
const MENU_ICON: &str = "\u{2630}";
const SETTINGS_ICON: &str = "\u{2699}";

pub fn render_top_bar(frame: &mut Frame, area: Rect, title: &str, route: Route) {
    let ctx = LayoutContext::from_rect(area);
    let bar_style = Style::default().bg(COLOR_PRIMARY).fg(COLOR_ON_PRIMARY);
    let inner = if area.height >= 3 {
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        }
    } else {
        area
    };
    frame.render_widget(Block::default().style(bar_style), area);

    let left = Line::from(vec![
        Span::raw(" "),
        Span::raw(MENU_ICON),
        Span::raw("  "),
        Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let right = if ctx.is_narrow() {
        format!("{} ", SETTINGS_ICON)
    } else {
        format!("{}  {} ", route.title(), SETTINGS_ICON)
    };
    let [left_area, right_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(right.chars().count() as u16),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(left).style(bar_style), left_area);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right).style(bar_style),
        right_area,
    );
}

pub fn render_bottom_bar(
    frame: &mut Frame,
    area: Rect,
    tabs: &[(Route, &'static str)],
    active: Option<usize>,
    palette: &Palette,
) {
    let ctx = LayoutContext::from_rect(area);
    let items: Vec<TabItem<'_>> = tabs
        .iter()
        .map(|(route, label)| TabItem::new(route.id(), label))
        .collect();

    let block = if area.height >= 3 {
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border))
    } else {
        Block::default()
    }
    .style(Style::default().bg(palette.input_bg));

    let line = render_tab_selector(&items, active, true, &ctx, palette);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}
