//! Application-wide settings shared across screens.
//!
//! [`AppSettings`] lives on the [`crate::app::App`] for the whole process and is
//! handed out by reference. Nothing here is ever written to disk; a restart
//! brings back the defaults (or whatever the command line seeded).

/// Smallest font scale the settings slider allows.
pub const FONT_SIZE_MIN: f32 = 0.5;
/// Largest font scale the settings slider allows.
pub const FONT_SIZE_MAX: f32 = 2.0;
/// Slider stops (two intermediate steps between min and max).
pub const FONT_SIZE_STOPS: [f32; 4] = [0.5, 1.0, 1.5, 2.0];

/// User-adjustable settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppSettings {
    dark_mode: bool,
    notifications: bool,
    font_size: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            font_size: 1.0,
        }
    }
}

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        tracing::debug!("settings: dark_mode = {}", enabled);
        self.dark_mode = enabled;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.set_dark_mode(!self.dark_mode);
    }

    pub fn notifications(&self) -> bool {
        self.notifications
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        tracing::debug!("settings: notifications = {}", enabled);
        self.notifications = enabled;
    }

    pub fn toggle_notifications(&mut self) {
        self.set_notifications(!self.notifications);
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Set the font scale, clamped to `[FONT_SIZE_MIN, FONT_SIZE_MAX]`.
    /// Non-finite values leave the setting untouched.
    pub fn set_font_size(&mut self, size: f32) {
        if !size.is_finite() {
            tracing::debug!("settings: ignoring non-finite font_size {}", size);
            return;
        }
        let clamped = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        tracing::debug!("settings: font_size = {}", clamped);
        self.font_size = clamped;
    }

    /// Move to the next slider stop above the current value.
    pub fn step_font_size_up(&mut self) {
        if let Some(stop) = FONT_SIZE_STOPS.iter().find(|stop| **stop > self.font_size) {
            self.set_font_size(*stop);
        }
    }

    /// Move to the next slider stop below the current value.
    pub fn step_font_size_down(&mut self) {
        if let Some(stop) = FONT_SIZE_STOPS
            .iter()
            .rev()
            .find(|stop| **stop < self.font_size)
        {
            self.set_font_size(*stop);
        }
    }

    /// Human label for the slider position.
    pub fn font_size_label(&self) -> &'static str {
        if self.font_size < 1.0 {
            "Small"
        } else if self.font_size < 1.5 {
            "Normal"
        } else {
            "Large"
        }
    }

    /// Slider position in `[0, 1]` for drawing.
    pub fn font_size_ratio(&self) -> f64 {
        f64::from((self.font_size - FONT_SIZE_MIN) / (FONT_SIZE_MAX - FONT_SIZE_MIN))
    }
}
