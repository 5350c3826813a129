//! Commands produced by keyboard input.

/// A user action, independent of the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Global
    /// Exit the app (Ctrl+C, Ctrl+Q, `q` outside text fields)
    Quit,
    /// Open or close the navigation drawer (Ctrl+O, `m`)
    ToggleDrawer,
    /// Open the settings dialog (Ctrl+S, `s`)
    OpenSettings,
    /// Close the top overlay, or go back a route (Esc)
    Back,
    /// Next bottom-bar tab (Ctrl+Right)
    NextTab,
    /// Previous bottom-bar tab (Ctrl+Left)
    PrevTab,

    // Focus and activation
    /// Tab
    FocusNext,
    /// Shift+Tab
    FocusPrev,
    /// Enter: press the focused button, or move on from a text field
    Activate,
    /// Space outside text fields: flip a switch/checkbox/radio
    Toggle,
    /// Right arrow: slider/radio forward
    Increase,
    /// Left arrow: slider/radio back
    Decrease,
    /// Up arrow
    Up,
    /// Down arrow
    Down,

    // Editing
    /// Printable character into the focused text field
    InsertChar(char),
    /// Delete the last character of the focused text field
    Backspace,
}

impl Command {
    /// Whether this command edits text (used to keep the caret solid).
    pub fn is_editing(&self) -> bool {
        matches!(self, Command::InsertChar(_) | Command::Backspace)
    }
}
