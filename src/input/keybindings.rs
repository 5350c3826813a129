//! Default keybindings.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::InputContext;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Key map: global bindings plus one table per [`InputContext`].
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Command>,
    pub context: HashMap<InputContext, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            context: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_shared_bindings();
        config.setup_screen_bindings();
        config.setup_overlay_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('q')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('o')), Command::ToggleDrawer);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::OpenSettings);
        self.global.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Right), Command::NextTab);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Left), Command::PrevTab);
    }

    /// Arrows, Tab and Enter mean the same thing in every context.
    fn setup_shared_bindings(&mut self) {
        let shared = [
            (KeyCombo::plain(KeyCode::Tab), Command::FocusNext),
            (KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev),
            (KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev),
            (KeyCombo::plain(KeyCode::Enter), Command::Activate),
            (KeyCombo::plain(KeyCode::Up), Command::Up),
            (KeyCombo::plain(KeyCode::Down), Command::Down),
            (KeyCombo::plain(KeyCode::Left), Command::Decrease),
            (KeyCombo::plain(KeyCode::Right), Command::Increase),
        ];
        for ctx in [
            InputContext::SettingsDialog,
            InputContext::Drawer,
            InputContext::TextEntry,
            InputContext::Screen,
        ] {
            self.context.entry(ctx).or_default().extend(shared);
        }
    }

    fn setup_screen_bindings(&mut self) {
        let screen = self.context.entry(InputContext::Screen).or_default();
        screen.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Toggle);
        screen.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        screen.insert(KeyCombo::plain(KeyCode::Char('m')), Command::ToggleDrawer);
        screen.insert(KeyCombo::plain(KeyCode::Char('s')), Command::OpenSettings);

        let text = self.context.entry(InputContext::TextEntry).or_default();
        text.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
    }

    fn setup_overlay_bindings(&mut self) {
        let drawer = self.context.entry(InputContext::Drawer).or_default();
        drawer.insert(KeyCombo::plain(KeyCode::Char('j')), Command::Down);
        drawer.insert(KeyCombo::plain(KeyCode::Char('k')), Command::Up);
        drawer.insert(KeyCombo::plain(KeyCode::Char('m')), Command::ToggleDrawer);
        drawer.insert(KeyCombo::plain(KeyCode::Char('q')), Command::ToggleDrawer);

        let dialog = self.context.entry(InputContext::SettingsDialog).or_default();
        dialog.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Toggle);
        dialog.insert(KeyCombo::plain(KeyCode::Char('j')), Command::Down);
        dialog.insert(KeyCombo::plain(KeyCode::Char('k')), Command::Up);
        dialog.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Back);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_context(&self, ctx: InputContext, combo: &KeyCombo) -> Option<Command> {
        self.context.get(&ctx).and_then(|map| map.get(combo)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_quit() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('c'))),
            Some(Command::Quit)
        );
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_shared_bindings_everywhere() {
        let config = KeybindingConfig::new();
        for ctx in [
            InputContext::SettingsDialog,
            InputContext::Drawer,
            InputContext::TextEntry,
            InputContext::Screen,
        ] {
            assert_eq!(
                config.get_context(ctx, &KeyCombo::plain(KeyCode::Enter)),
                Some(Command::Activate)
            );
        }
    }

    #[test]
    fn test_letters_unbound_in_text_entry() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_context(InputContext::TextEntry, &KeyCombo::plain(KeyCode::Char('q'))),
            None
        );
        assert_eq!(
            config.get_context(InputContext::Screen, &KeyCombo::plain(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
    }
}
