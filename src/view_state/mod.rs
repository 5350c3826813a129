//! Screen controllers and the plain view data they emit.
//!
//! Each calculator screen owns its raw text inputs, a result slot and a
//! two-state action button. Pressing the button in [`ScreenMode::Ready`] runs
//! the calculation; pressing it again in [`ScreenMode::ShowingResult`] clears
//! everything. Nothing is recomputed while the user types.
//!
//! Controllers never draw. They hand out view structs ([`GpaView`],
//! [`PizzaView`], [`DialView`], and the aggregate [`AppViewState`]) that the
//! UI renders as a pure function of data.
//!
//! ```text
//!   key event ──► controller ──► calc ──► view struct ──► ui::render
//! ```

mod app_view;
mod dial;
mod gpa;
mod pizza;

pub use app_view::{AppViewState, DrawerView, ScreenView, SettingsDialogView};
pub use dial::{DialFocus, DialScreen, DialView, DIAL_NUMBER, SLIDER_STEP};
pub use gpa::{Backdrop, Course, GpaFocus, GpaResult, GpaScreen, GpaView, INVALID_INPUT_MESSAGE};
pub use pizza::{PizzaFocus, PizzaScreen, PizzaView};

/// Action-button state shared by the calculator screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    /// Inputs editable, button calculates.
    #[default]
    Ready,
    /// A result is on screen, button clears.
    ShowingResult,
}

/// What pressing the action button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A result was computed and the screen moved to `ShowingResult`.
    Calculated,
    /// Inputs were unusable; an error message is shown and the mode is unchanged.
    Rejected,
    /// Inputs and result were wiped and the screen is back to `Ready`.
    Cleared,
}

/// Apply a typed character to a text field.
pub(crate) fn push_char(field: &mut String, c: char) {
    if !c.is_control() {
        field.push(c);
    }
}

/// Apply pasted text to a single-line field. Line breaks are dropped.
pub(crate) fn push_str(field: &mut String, text: &str) {
    field.extend(text.chars().filter(|c| !c.is_control()));
}
