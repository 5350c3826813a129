//! Color theme constants for the Pizza Party UI
//!
//! Two palettes, picked by the dark mode setting, plus the GPA backdrop colors.

use ratatui::style::Color;

use crate::view_state::Backdrop;

// ============================================================================
// Light Theme
// ============================================================================

pub const LIGHT_BG: Color = Color::Rgb(250, 250, 250);
pub const LIGHT_FG: Color = Color::Rgb(20, 20, 30);
pub const LIGHT_DIM: Color = Color::Rgb(110, 110, 120);
pub const LIGHT_BORDER: Color = Color::Rgb(170, 170, 180);
pub const LIGHT_INPUT_BG: Color = Color::Rgb(235, 235, 240);

// ============================================================================
// Dark Theme
// ============================================================================

pub const DARK_BG: Color = Color::Rgb(10, 15, 35);
pub const DARK_FG: Color = Color::White;
pub const DARK_DIM: Color = Color::DarkGray;
pub const DARK_BORDER: Color = Color::DarkGray;
pub const DARK_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Shared
// ============================================================================

/// App bar and selected tab - pizza red
pub const COLOR_PRIMARY: Color = Color::Rgb(198, 40, 40);

/// Text on top of the primary color
pub const COLOR_ON_PRIMARY: Color = Color::White;

/// Focus ring and selection marker
pub const COLOR_ACCENT: Color = Color::Rgb(255, 179, 0);

/// Dial screen gradient, top and bottom
pub const COLOR_DIAL_TOP: Color = Color::Cyan;
pub const COLOR_DIAL_BOTTOM: Color = Color::Blue;

/// Resolved colors for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub border: Color,
    pub input_bg: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        bg: LIGHT_BG,
        fg: LIGHT_FG,
        dim: LIGHT_DIM,
        border: LIGHT_BORDER,
        input_bg: LIGHT_INPUT_BG,
    };

    pub const DARK: Palette = Palette {
        bg: DARK_BG,
        fg: DARK_FG,
        dim: DARK_DIM,
        border: DARK_BORDER,
        input_bg: DARK_INPUT_BG,
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// Background behind the GPA screen.
pub fn backdrop_color(backdrop: Backdrop) -> Color {
    match backdrop {
        Backdrop::Neutral => Color::Cyan,
        Backdrop::Low => Color::Red,
        Backdrop::Mid => Color::Yellow,
        Backdrop::High => Color::Green,
    }
}
