use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::form_column;
use crate::ui::components::{render_button, render_input_field, InputFieldConfig};
use crate::ui::theme::{backdrop_color, Palette};
use crate::view_state::{GpaFocus, GpaView};

/// Text drawn directly on the colored backdrop
const ON_BACKDROP: Color = Color::Black;

pub fn render_gpa_screen(
    frame: &mut Frame,
    area: Rect,
    view: &GpaView<'_>,
    cursor_visible: bool,
    palette: &Palette,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(backdrop_color(view.backdrop))),
        area,
    );

    let column = form_column(area);
    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1), // button
        Constraint::Length(1),
        Constraint::Length(1), // result
        Constraint::Min(0),
    ])
    .split(column);

    let fields = [GpaFocus::Grade1, GpaFocus::Grade2, GpaFocus::Grade3];
    for (i, field) in fields.iter().enumerate() {
        let config = InputFieldConfig::new(view.labels[i], view.grades[i])
            .focused(view.focus == *field)
            .cursor_visible(cursor_visible);
        render_input_field(frame, rows[i], &config, palette);
    }

    render_button(
        frame,
        rows[4],
        view.action_label,
        view.focus == GpaFocus::Action,
        palette,
    );

    if let Some(result) = &view.result_text {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                result.clone(),
                Style::default().fg(ON_BACKDROP).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[6],
        );
    }
}
