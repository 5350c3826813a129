//! Commands aimed at the controls of the active screen.

use crate::app::{ActiveScreen, App, Route};
use crate::input::Command;
use crate::view_state::{DialFocus, DialScreen, GpaFocus, GpaScreen, PizzaFocus, PizzaScreen, SLIDER_STEP};

pub fn handle_screen_command(app: &mut App, cmd: Command) -> bool {
    if matches!(cmd, Command::Activate | Command::Toggle) {
        if let ActiveScreen::Dial(screen) = app.shell.active() {
            if screen.focus() == DialFocus::Call {
                screen.call(app.dialer.as_ref());
                return true;
            }
        }
    }

    let handled = match app.shell.active_mut() {
        ActiveScreen::Welcome => {
            if cmd == Command::Activate {
                app.navigate_to(Route::Pizza);
                return true;
            }
            false
        }
        ActiveScreen::Gpa(screen) => handle_gpa(screen, cmd),
        ActiveScreen::Pizza(screen) => handle_pizza(screen, cmd),
        ActiveScreen::Dial(screen) => handle_dial(screen, cmd),
        ActiveScreen::Help | ActiveScreen::About => false,
    };
    if handled {
        app.reset_cursor();
    }
    handled
}

fn handle_gpa(screen: &mut GpaScreen, cmd: Command) -> bool {
    match cmd {
        Command::FocusNext | Command::Down => screen.focus_next(),
        Command::FocusPrev | Command::Up => screen.focus_previous(),
        Command::Activate => {
            if screen.focus() == GpaFocus::Action {
                let outcome = screen.press_action();
                tracing::debug!("GPA action: {:?}", outcome);
            } else {
                screen.focus_next();
            }
        }
        _ => return false,
    }
    true
}

fn handle_pizza(screen: &mut PizzaScreen, cmd: Command) -> bool {
    let on_hunger = screen.focus() == PizzaFocus::Hunger;
    match cmd {
        Command::FocusNext => screen.focus_next(),
        Command::FocusPrev => screen.focus_previous(),
        Command::Down | Command::Increase if on_hunger => screen.next_hunger(),
        Command::Up | Command::Decrease if on_hunger => screen.previous_hunger(),
        Command::Toggle if on_hunger => screen.next_hunger(),
        Command::Down => screen.focus_next(),
        Command::Up => screen.focus_previous(),
        Command::Activate => {
            if screen.focus() == PizzaFocus::Action {
                let outcome = screen.press_action();
                tracing::debug!("Pizza action: {:?}", outcome);
            } else {
                screen.focus_next();
            }
        }
        _ => return false,
    }
    true
}

fn handle_dial(screen: &mut DialScreen, cmd: Command) -> bool {
    let focus = screen.focus();
    match cmd {
        Command::FocusNext | Command::Down => screen.focus_next(),
        Command::FocusPrev | Command::Up => screen.focus_previous(),
        Command::Increase if focus == DialFocus::Slider => screen.adjust_slider(SLIDER_STEP),
        Command::Decrease if focus == DialFocus::Slider => screen.adjust_slider(-SLIDER_STEP),
        Command::Activate | Command::Toggle if focus == DialFocus::Checkbox => {
            screen.toggle_slider_enabled()
        }
        _ => return false,
    }
    true
}
