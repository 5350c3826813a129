//! Maps key events to commands for the current context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Dispatches key events to commands.
///
/// Lookup order:
/// 1. Global bindings
/// 2. Bindings for the current [`InputContext`]
/// 3. In text entry, any printable character becomes [`Command::InsertChar`]
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn dispatch(&self, key: KeyEvent, context: InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, normalize_modifiers(key.code, key.modifiers));

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd);
        }

        if let Some(cmd) = self.config.get_context(context, &combo) {
            return Some(cmd);
        }

        if context.accepts_text() {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return Some(Command::InsertChar(c));
                }
            }
        }

        None
    }
}

/// Shift on a character key is already baked into the character, so drop
/// it before lookup. Without this, `Shift+S` would never match `S`.
fn normalize_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    }
}
