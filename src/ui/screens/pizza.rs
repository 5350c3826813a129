use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::form_column;
use crate::calc::HungerLevel;
use crate::ui::components::{
    render_button, render_input_field, render_tab_selector, InputFieldConfig, TabItem,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{Palette, COLOR_PRIMARY};
use crate::view_state::{PizzaFocus, PizzaView};

pub fn render_pizza_screen(
    frame: &mut Frame,
    area: Rect,
    view: &PizzaView<'_>,
    cursor_visible: bool,
    palette: &Palette,
) {
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let column = form_column(area);
    let rows = Layout::vertical([
        Constraint::Length(4), // people
        Constraint::Length(1), // hunger label
        Constraint::Length(1), // hunger options
        Constraint::Length(1),
        Constraint::Length(1), // button
        Constraint::Length(1),
        Constraint::Length(1), // result
        Constraint::Min(0),
    ])
    .split(column);

    let people = InputFieldConfig::new("Number of people", view.people)
        .placeholder("0")
        .focused(view.focus == PizzaFocus::People)
        .cursor_visible(cursor_visible);
    render_input_field(frame, rows[0], &people, palette);

    let hunger_focused = view.focus == PizzaFocus::Hunger;
    let label_style = if hunger_focused {
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("How hungry?", label_style))),
        rows[1],
    );

    let items: Vec<TabItem<'_>> = HungerLevel::ALL
        .iter()
        .map(|level| hunger_item(*level))
        .collect();
    let selected = HungerLevel::ALL.iter().position(|level| *level == view.hunger);
    let ctx = LayoutContext::from_rect(area);
    frame.render_widget(
        Paragraph::new(render_tab_selector(&items, selected, hunger_focused, &ctx, palette)),
        rows[2],
    );

    render_button(
        frame,
        rows[4],
        view.action_label,
        view.focus == PizzaFocus::Action,
        palette,
    );

    if let Some(result) = &view.result_text {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                result.clone(),
                Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[6],
        );
    }
}

fn hunger_item(level: HungerLevel) -> TabItem<'static> {
    match level {
        HungerLevel::VeryHungry => TabItem::with_short_label("very_hungry", level.label(), "V.hungry"),
        _ => TabItem::new(level.label(), level.label()),
    }
}
