//! Blinking caret for the focused text field.

/// Tracks caret visibility from the tick counter.
///
/// The caret stays solid for `blinkwait_ticks` after the last keystroke, then
/// alternates visible/hidden every `blink_half_cycle_ticks`. With the default
/// 250ms tick that is a half-second wait followed by a one-second blink cycle.
#[derive(Debug, Clone)]
pub struct CursorBlinkState {
    last_activity_tick: u64,
    is_visible: bool,
    blinkwait_ticks: u64,
    blink_half_cycle_ticks: u64,
}

impl Default for CursorBlinkState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorBlinkState {
    pub fn new() -> Self {
        Self::with_timing(2, 2)
    }

    /// Custom timing, both values in ticks. A half cycle of zero is treated
    /// as one.
    pub fn with_timing(blinkwait_ticks: u64, blink_half_cycle_ticks: u64) -> Self {
        Self {
            last_activity_tick: 0,
            is_visible: true,
            blinkwait_ticks,
            blink_half_cycle_ticks: blink_half_cycle_ticks.max(1),
        }
    }

    /// Keystroke or focus change: show the caret and restart the wait.
    pub fn reset(&mut self, current_tick: u64) {
        self.last_activity_tick = current_tick;
        self.is_visible = true;
    }

    /// Recompute visibility. Returns `true` when it flipped, meaning the
    /// screen needs a redraw.
    pub fn update(&mut self, current_tick: u64) -> bool {
        let idle = current_tick.saturating_sub(self.last_activity_tick);

        let visible = if idle < self.blinkwait_ticks {
            true
        } else {
            let into_blink = idle - self.blinkwait_ticks;
            into_blink % (self.blink_half_cycle_ticks * 2) < self.blink_half_cycle_ticks
        };

        let changed = self.is_visible != visible;
        self.is_visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_during_wait() {
        let mut state = CursorBlinkState::new();
        state.reset(10);
        assert!(!state.update(11));
        assert!(state.is_visible());
    }

    #[test]
    fn test_blinks_after_wait() {
        let mut state = CursorBlinkState::with_timing(2, 2);
        state.reset(0);
        state.update(2);
        assert!(state.is_visible());
        assert!(state.update(4));
        assert!(!state.is_visible());
        assert!(state.update(6));
        assert!(state.is_visible());
    }

    #[test]
    fn test_reset_shows_caret() {
        let mut state = CursorBlinkState::with_timing(0, 1);
        state.update(1);
        assert!(!state.is_visible());
        state.reset(1);
        assert!(state.is_visible());
    }

    #[test]
    fn test_zero_half_cycle_does_not_divide_by_zero() {
        let mut state = CursorBlinkState::with_timing(0, 0);
        state.update(5);
    }
}
