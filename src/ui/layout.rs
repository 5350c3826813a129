//! Responsive Layout System
//!
//! `LayoutContext` wraps the frame dimensions and answers the sizing
//! questions every renderer asks: how wide is a form, how wide is the drawer,
//! how much chrome fits around the body.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```
/// use pizza_party::ui::layout::LayoutContext;
///
/// let ctx = LayoutContext::new(120, 40);
/// assert_eq!(ctx.percent_width(50), 60);
/// assert!(!ctx.is_compact());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: condense labels and spacing.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Chrome
    // ========================================================================

    /// Top app bar rows.
    pub fn top_bar_height(&self) -> u16 {
        if self.is_extra_small() {
            1
        } else {
            3
        }
    }

    /// Bottom navigation bar rows.
    pub fn bottom_bar_height(&self) -> u16 {
        if self.is_extra_small() {
            1
        } else {
            3
        }
    }

    /// Width of the slide-in drawer.
    pub fn drawer_width(&self) -> u16 {
        if self.is_narrow() {
            self.width.saturating_sub(4).min(28)
        } else {
            self.bounded_width(30, 28, 40)
        }
    }

    /// Width of a centered form column.
    pub fn form_width(&self) -> u16 {
        if self.is_extra_small() {
            self.width.saturating_sub(2)
        } else {
            self.bounded_width(60, 40, 64).min(self.width)
        }
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width_has_floor_of_one() {
        let ctx = LayoutContext::new(10, 10);
        assert_eq!(ctx.percent_width(50), 5);
        assert_eq!(ctx.percent_width(0), 1);
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        let ctx = LayoutContext::new(40, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 20);
    }

    #[test]
    fn test_size_categories() {
        let ctx = LayoutContext::new(79, 30);
        assert!(ctx.is_narrow());
        assert!(ctx.is_compact());
        assert!(!ctx.is_extra_small());

        let ctx = LayoutContext::new(100, 15);
        assert!(ctx.is_short());
        assert!(ctx.is_extra_small());

        let ctx = LayoutContext::default();
        assert!(!ctx.is_compact());
    }

    #[test]
    fn test_chrome_shrinks_on_tiny_terminals() {
        assert_eq!(LayoutContext::new(80, 24).top_bar_height(), 3);
        assert_eq!(LayoutContext::new(40, 12).top_bar_height(), 1);
        assert_eq!(LayoutContext::new(40, 12).bottom_bar_height(), 1);
    }

    #[test]
    fn test_drawer_and_form_fit_terminal() {
        for (w, h) in [(20, 10), (60, 20), (80, 24), (200, 60)] {
            let ctx = LayoutContext::new(w, h);
            assert!(ctx.drawer_width() <= w);
            assert!(ctx.form_width() <= w);
        }
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 20, 40, 10));
        // Oversized requests are clipped to the area
        assert_eq!(centered_rect(area, 200, 80), area);
    }
}
