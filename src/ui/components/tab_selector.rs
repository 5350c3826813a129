//! Tab Selector Component
//!
//! A horizontal selector with a `▶` marker on the selected item. Used for the
//! bottom navigation bar and the hunger level radio group.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{Palette, COLOR_ACCENT};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Unique identifier for the tab
    pub id: &'a str,
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    /// Same label for both normal and compact modes
    pub fn new(id: &'a str, label: &'a str) -> Self {
        Self {
            id,
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(id: &'a str, label: &'a str, short_label: &'a str) -> Self {
        Self {
            id,
            label,
            short_label,
        }
    }
}

/// Render a horizontal tab selector.
///
/// `selected` may be `None` when nothing in the strip is current, for
/// example the bottom bar while Help is on screen.
///
/// # Example
/// ```ignore
/// let items = vec![
///     TabItem::new("pizza", "Pizza"),
///     TabItem::new("gpa", "GPA"),
/// ];
/// let line = render_tab_selector(&items, Some(0), true, &ctx, &palette);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: Option<usize>,
    focused: bool,
    ctx: &LayoutContext,
    palette: &Palette,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    spans.push(Span::raw("  "));

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if Some(idx) == selected {
            let marker_style = if focused {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.dim)
            };
            let text_style = if focused {
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };

            spans.push(Span::styled("▶ ".to_string(), marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            let text_style = Style::default().fg(palette.dim);
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::with_short_label("very_hungry", "Very hungry", "V.hungry"),
            TabItem::new("light", "Light"),
        ]
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tab_item_with_short_label() {
        let item = TabItem::with_short_label("gpa", "GPA Calculator", "GPA");
        assert_eq!(item.id, "gpa");
        assert_eq!(item.label, "GPA Calculator");
        assert_eq!(item.short_label, "GPA");
    }

    #[test]
    fn test_render_second_selected() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let text = text_of(&render_tab_selector(&items, Some(1), true, &ctx, &Palette::LIGHT));

        let marker_pos = text.find('▶').unwrap();
        assert!(marker_pos > text.find("Very hungry").unwrap());
        assert!(marker_pos < text.find("Light").unwrap());
    }

    #[test]
    fn test_no_selection_has_no_marker() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let text = text_of(&render_tab_selector(&items, None, false, &ctx, &Palette::DARK));
        assert!(!text.contains('▶'));
        assert!(text.contains("Light"));
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let items = create_test_items();
        let ctx = LayoutContext::new(50, 14);
        let text = text_of(&render_tab_selector(&items, Some(0), true, &ctx, &Palette::DARK));
        assert!(text.contains("V.hungry"));
        assert!(!text.contains("Very hungry"));
    }

    #[test]
    fn test_unfocused_still_shows_selection() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let text = text_of(&render_tab_selector(&items, Some(0), false, &ctx, &Palette::DARK));
        assert!(text.contains('▶'));
    }
}
