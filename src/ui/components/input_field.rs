//! Input Field Component
//!
//! A labelled text input with focus handling, placeholder text and a caret
//! that follows the blink state.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{Palette, COLOR_ACCENT};

/// Block caret drawn after the value
const CARET: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Caret blink phase; only drawn when focused
    pub cursor_visible: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            cursor_visible: true,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn display_text(&self) -> String {
        let mut content = match self.placeholder {
            Some(placeholder) if self.value.is_empty() && !self.focused => placeholder.to_string(),
            _ => self.value.to_string(),
        };
        if self.focused && self.cursor_visible {
            content.push(CARET);
        }
        content
    }
}

/// Render an input field with label and input box.
///
/// Returns the height consumed.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    palette: &Palette,
) -> u16 {
    let label_style = if config.focused {
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };

    let label_area = Rect {
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1).min(3),
        ..area
    };

    let border_color = if config.focused {
        COLOR_ACCENT
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.input_bg));

    let showing_placeholder = config.value.is_empty() && !config.focused;
    let text_style = if showing_placeholder {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.fg)
    };

    let input = Paragraph::new(Line::from(Span::styled(config.display_text(), text_style)))
        .block(block);
    frame.render_widget(input, input_area);

    label_area.height + input_area.height
}

// ============================================================================
// Tests
// ============================================================================
