//! Pizza order screen controller.

use crate::calc::{parse_headcount, pizzas_for, HungerLevel};

use super::{push_char, push_str, ActionOutcome, ScreenMode};

/// Focusable controls on the pizza screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PizzaFocus {
    #[default]
    People,
    Hunger,
    Action,
}

impl PizzaFocus {
    pub fn next(self) -> Self {
        match self {
            PizzaFocus::People => PizzaFocus::Hunger,
            PizzaFocus::Hunger => PizzaFocus::Action,
            PizzaFocus::Action => PizzaFocus::People,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            PizzaFocus::People => PizzaFocus::Action,
            PizzaFocus::Hunger => PizzaFocus::People,
            PizzaFocus::Action => PizzaFocus::Hunger,
        }
    }
}

/// Controller for the pizza party calculator.
#[derive(Debug, Clone, Default)]
pub struct PizzaScreen {
    people: String,
    hunger: HungerLevel,
    total_pizzas: Option<u64>,
    mode: ScreenMode,
    focus: PizzaFocus,
}

/// Plain data for drawing the pizza screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaView<'a> {
    pub people: &'a str,
    pub hunger: HungerLevel,
    pub focus: PizzaFocus,
    pub action_label: &'static str,
    pub result_text: Option<String>,
    pub mode: ScreenMode,
}

impl PizzaScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    pub fn hunger(&self) -> HungerLevel {
        self.hunger
    }

    pub fn set_hunger(&mut self, level: HungerLevel) {
        self.hunger = level;
    }

    pub fn next_hunger(&mut self) {
        self.hunger = self.hunger.next();
    }

    pub fn previous_hunger(&mut self) {
        self.hunger = self.hunger.previous();
    }

    pub fn total_pizzas(&self) -> Option<u64> {
        self.total_pizzas
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    pub fn focus(&self) -> PizzaFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: PizzaFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn is_editing_text(&self) -> bool {
        self.focus == PizzaFocus::People
    }

    pub fn action_label(&self) -> &'static str {
        match self.mode {
            ScreenMode::Ready => "Calculate",
            ScreenMode::ShowingResult => "Clear",
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_editing_text() {
            push_char(&mut self.people, c);
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        if self.is_editing_text() {
            push_str(&mut self.people, text);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_editing_text() {
            self.people.pop();
        }
    }

    /// Press the Calculate/Clear button.
    ///
    /// An unusable headcount counts as zero people, so calculating always
    /// succeeds.
    pub fn press_action(&mut self) -> ActionOutcome {
        match self.mode {
            ScreenMode::Ready => {
                let people = parse_headcount(&self.people);
                let total = pizzas_for(people, self.hunger);
                tracing::debug!(
                    "pizza: {} people at {} -> {} pizzas",
                    people,
                    self.hunger.label(),
                    total
                );
                self.total_pizzas = Some(total);
                self.mode = ScreenMode::ShowingResult;
                ActionOutcome::Calculated
            }
            ScreenMode::ShowingResult => {
                self.clear();
                ActionOutcome::Cleared
            }
        }
    }

    /// Reset inputs, result and button. Safe to call in any mode.
    pub fn clear(&mut self) {
        self.people.clear();
        self.hunger = HungerLevel::default();
        self.total_pizzas = None;
        self.mode = ScreenMode::Ready;
        self.focus = PizzaFocus::People;
    }

    pub fn view(&self) -> PizzaView<'_> {
        PizzaView {
            people: &self.people,
            hunger: self.hunger,
            focus: self.focus,
            action_label: self.action_label(),
            result_text: self
                .total_pizzas
                .map(|total| format!("Total pizzas: {}", total)),
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_and_clear() {
        let mut screen = PizzaScreen::new();
        screen.set_people("10");
        screen.set_hunger(HungerLevel::Hungry);
        assert_eq!(screen.press_action(), ActionOutcome::Calculated);
        assert_eq!(screen.total_pizzas(), Some(5));
        assert_eq!(screen.view().result_text.as_deref(), Some("Total pizzas: 5"));
        assert_eq!(screen.action_label(), "Clear");

        assert_eq!(screen.press_action(), ActionOutcome::Cleared);
        assert_eq!(screen.people(), "");
        assert_eq!(screen.hunger(), HungerLevel::Medium);
        assert_eq!(screen.total_pizzas(), None);
        assert_eq!(screen.mode(), ScreenMode::Ready);
    }

    #[test]
    fn test_bad_headcount_silently_zero() {
        let mut screen = PizzaScreen::new();
        screen.set_people("lots");
        assert_eq!(screen.press_action(), ActionOutcome::Calculated);
        assert_eq!(screen.total_pizzas(), Some(0));
    }

    #[test]
    fn test_hunger_radio_cycles() {
        let mut screen = PizzaScreen::new();
        screen.next_hunger();
        assert_eq!(screen.hunger(), HungerLevel::Hungry);
        screen.previous_hunger();
        screen.previous_hunger();
        assert_eq!(screen.hunger(), HungerLevel::Light);
    }

    #[test]
    fn test_typing_only_in_people_field() {
        let mut screen = PizzaScreen::new();
        screen.insert_char('1');
        screen.insert_str("2");
        screen.focus_next();
        screen.insert_char('3');
        assert_eq!(screen.people(), "12");
        screen.focus_previous();
        screen.backspace();
        assert_eq!(screen.people(), "1");
    }

    #[test]
    fn test_clear_when_ready_is_noop() {
        let mut screen = PizzaScreen::new();
        screen.clear();
        assert_eq!(screen.people(), "");
        assert_eq!(screen.mode(), ScreenMode::Ready);
        assert!(screen.view().result_text.is_none());
    }
}
