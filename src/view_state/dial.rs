//! Controller for the slider/checkbox/"Call me" screen.

use crate::error::AppError;
use crate::traits::Dialer;

/// The number the "Call me" button dials.
pub const DIAL_NUMBER: &str = "6314202000";

/// Slider movement per key press.
pub const SLIDER_STEP: f32 = 0.05;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialFocus {
    #[default]
    Slider,
    Call,
    Checkbox,
}

impl DialFocus {
    pub fn next(self) -> Self {
        match self {
            DialFocus::Slider => DialFocus::Call,
            DialFocus::Call => DialFocus::Checkbox,
            DialFocus::Checkbox => DialFocus::Slider,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DialFocus::Slider => DialFocus::Checkbox,
            DialFocus::Call => DialFocus::Slider,
            DialFocus::Checkbox => DialFocus::Call,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DialScreen {
    slider: f32,
    slider_enabled: bool,
    focus: DialFocus,
}

impl Default for DialScreen {
    fn default() -> Self {
        Self {
            slider: 0.5,
            slider_enabled: true,
            focus: DialFocus::default(),
        }
    }
}

/// Plain data for drawing the dial screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DialView {
    pub slider: f32,
    pub slider_enabled: bool,
    pub slider_label: String,
    pub focus: DialFocus,
}

impl DialScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slider(&self) -> f32 {
        self.slider
    }

    pub fn slider_enabled(&self) -> bool {
        self.slider_enabled
    }

    pub fn focus(&self) -> DialFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: DialFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Move the slider by `delta`, clamped to `[0, 1]`. Ignored while the
    /// checkbox is unticked.
    pub fn adjust_slider(&mut self, delta: f32) {
        if !self.slider_enabled {
            return;
        }
        // Snap to the step grid so repeated presses don't drift.
        let steps = ((self.slider + delta) / SLIDER_STEP).round();
        self.slider = (steps * SLIDER_STEP).clamp(0.0, 1.0);
    }

    pub fn set_slider_enabled(&mut self, enabled: bool) {
        self.slider_enabled = enabled;
    }

    pub fn toggle_slider_enabled(&mut self) {
        self.slider_enabled = !self.slider_enabled;
    }

    pub fn slider_label(&self) -> String {
        format!("Slider value: {:.2}", self.slider)
    }

    /// Hand the fixed number to the host dialer. Failures are logged and
    /// otherwise left to the host.
    pub fn call(&self, dialer: &dyn Dialer) {
        if let Err(e) = dialer.dial(DIAL_NUMBER) {
            let err = AppError::from(e);
            tracing::warn!("Call request failed: {}", err);
        }
    }

    pub fn view(&self) -> DialView {
        DialView {
            slider: self.slider,
            slider_enabled: self.slider_enabled,
            slider_label: self.slider_label(),
            focus: self.focus,
        }
    }
}
