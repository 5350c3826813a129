//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Clears whatever is behind it
//! and sizes itself to the terminal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{Palette, COLOR_ACCENT};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 50,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() {
        // Take most of the screen, leave 2 cols margin each side
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    };
    width.min(area_width)
}

/// Render a dialog frame and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    config: &DialogFrameConfig,
    palette: &Palette,
) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let dialog_width = calculate_dialog_width(&ctx, config, area.width);
    let dialog_height = (config.content_height + 2).min(area.height);

    let dialog_area = crate::ui::layout::centered_rect(area, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg).fg(palette.fg));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Settings", 10)
            .min_width(40)
            .max_width(70);
        assert_eq!(config.title, "Settings");
        assert_eq!(config.content_height, 10);
        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 70);
    }

    #[test]
    fn test_calculate_dialog_width_extra_small() {
        let ctx = LayoutContext::new(50, 14);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 50), 46);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        // 50% of 120 = 60, clamped to max 50
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 50);
    }

    #[test]
    fn test_calculate_dialog_width_never_exceeds_area() {
        let ctx = LayoutContext::new(20, 10);
        let config = DialogFrameConfig::new("Test", 10);
        assert!(calculate_dialog_width(&ctx, &config, 20) <= 20);
    }
}
