//! End-to-end key flows through the calculator, dial and settings screens.

mod common;

use common::{app_on, press, press_ctrl, type_str};
use crossterm::event::KeyCode;
use pizza_party::app::{ActiveScreen, App, Route};
use pizza_party::calc::{GpaBand, HungerLevel};
use pizza_party::view_state::{
    Backdrop, Course, DialFocus, GpaResult, GpaScreen, PizzaScreen, ScreenMode, DIAL_NUMBER,
};

fn gpa(app: &App) -> &GpaScreen {
    match app.shell.active() {
        ActiveScreen::Gpa(screen) => screen,
        other => panic!("expected GPA screen, got {:?}", other.route()),
    }
}

fn pizza(app: &App) -> &PizzaScreen {
    match app.shell.active() {
        ActiveScreen::Pizza(screen) => screen,
        other => panic!("expected pizza screen, got {:?}", other.route()),
    }
}

/// Type three grades, pressing Enter after each, then press the button.
fn enter_grades(app: &mut App, grades: [&str; 3]) {
    for grade in grades {
        type_str(app, grade);
        press(app, KeyCode::Enter);
    }
    press(app, KeyCode::Enter);
}

// ============================================================================
// GPA
// ============================================================================

#[test]
fn test_gpa_calculate_then_clear() {
    let (mut app, _) = app_on(Route::Gpa);
    enter_grades(&mut app, ["85", "90", "78"]);

    let screen = gpa(&app);
    assert_eq!(screen.mode(), ScreenMode::ShowingResult);
    assert_eq!(screen.action_label(), "Clear");
    assert_eq!(screen.backdrop(), Backdrop::High);
    let text = screen.view().result_text.expect("result shown");
    assert!(text.starts_with("GPA: 84.33"), "{}", text);

    // Button keeps focus, so Enter clears.
    press(&mut app, KeyCode::Enter);
    let screen = gpa(&app);
    assert_eq!(screen.mode(), ScreenMode::Ready);
    assert_eq!(screen.action_label(), "Calculate GPA");
    assert_eq!(screen.grade(Course::First), "");
    assert!(screen.result().is_none());
    assert_eq!(screen.backdrop(), Backdrop::Neutral);
}

#[test]
fn test_gpa_bands_drive_backdrop() {
    let cases = [
        (["50", "50", "50"], GpaBand::Low, Backdrop::Low),
        (["60", "60", "60"], GpaBand::Mid, Backdrop::Mid),
        (["79", "79", "79"], GpaBand::Mid, Backdrop::Mid),
        (["80", "80", "80"], GpaBand::High, Backdrop::High),
    ];
    for (grades, band, backdrop) in cases {
        let (mut app, _) = app_on(Route::Gpa);
        enter_grades(&mut app, grades);
        let screen = gpa(&app);
        match screen.result() {
            Some(GpaResult::Value { band: got, .. }) => assert_eq!(*got, band, "{:?}", grades),
            other => panic!("expected value for {:?}, got {:?}", grades, other),
        }
        assert_eq!(screen.backdrop(), backdrop);
    }
}

#[test]
fn test_gpa_invalid_input_stays_ready() {
    let (mut app, _) = app_on(Route::Gpa);
    enter_grades(&mut app, ["85", "abc", "90"]);

    let screen = gpa(&app);
    assert_eq!(screen.result(), Some(&GpaResult::Invalid));
    assert_eq!(screen.mode(), ScreenMode::Ready);
    assert_eq!(screen.action_label(), "Calculate GPA");
    assert_eq!(screen.backdrop(), Backdrop::Neutral);
    assert_eq!(
        screen.view().result_text.as_deref(),
        Some("GPA: Invalid input")
    );
}

#[test]
fn test_gpa_fix_typo_and_recalculate() {
    let (mut app, _) = app_on(Route::Gpa);
    enter_grades(&mut app, ["85", "9x", "75"]);
    assert_eq!(gpa(&app).result(), Some(&GpaResult::Invalid));

    // Back up to the second grade and repair it.
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "0");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    let screen = gpa(&app);
    assert_eq!(screen.grade(Course::Second), "90");
    assert_eq!(screen.mode(), ScreenMode::ShowingResult);
    let text = screen.view().result_text.expect("result shown");
    assert!(text.starts_with("GPA: 83.33"), "{}", text);
}

#[test]
fn test_letters_typed_into_grade_field_not_commands() {
    let (mut app, _) = app_on(Route::Gpa);
    type_str(&mut app, "qms");
    assert!(!app.should_quit);
    assert!(!app.drawer.is_open());
    assert!(!app.settings_dialog.is_open());
    assert_eq!(gpa(&app).grade(Course::First), "qms");
}

#[test]
fn test_paste_goes_into_focused_grade() {
    let (mut app, _) = app_on(Route::Gpa);
    assert!(app.handle_paste("88\n"));
    assert_eq!(gpa(&app).grade(Course::First), "88");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    // The button has focus now
    assert!(!app.handle_paste("12"));
}

// ============================================================================
// Pizza
// ============================================================================

#[test]
fn test_pizza_default_hunger_is_medium() {
    let (mut app, _) = app_on(Route::Pizza);
    type_str(&mut app, "10");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    let screen = pizza(&app);
    assert_eq!(screen.hunger(), HungerLevel::Medium);
    assert_eq!(screen.total_pizzas(), Some(4));
    assert_eq!(
        screen.view().result_text.as_deref(),
        Some("Total pizzas: 4")
    );
    assert_eq!(screen.action_label(), "Clear");
}

#[test]
fn test_pizza_hunger_radio_group() {
    let (mut app, _) = app_on(Route::Pizza);
    type_str(&mut app, "3");
    press(&mut app, KeyCode::Tab);

    // Medium -> Hungry -> Very hungry
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(pizza(&app).hunger(), HungerLevel::VeryHungry);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(pizza(&app).total_pizzas(), Some(2));
}

#[test]
fn test_pizza_bad_headcount_counts_as_zero() {
    let (mut app, _) = app_on(Route::Pizza);
    type_str(&mut app, "ten");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let screen = pizza(&app);
    assert_eq!(screen.total_pizzas(), Some(0));
    assert_eq!(screen.mode(), ScreenMode::ShowingResult);
}

#[test]
fn test_pizza_clear_resets_everything() {
    let (mut app, _) = app_on(Route::Pizza);
    type_str(&mut app, "12");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(pizza(&app).total_pizzas(), Some(3));

    press(&mut app, KeyCode::Enter);
    let screen = pizza(&app);
    assert_eq!(screen.people(), "");
    assert_eq!(screen.hunger(), HungerLevel::Medium);
    assert_eq!(screen.total_pizzas(), None);
    assert_eq!(screen.mode(), ScreenMode::Ready);
}

#[test]
fn test_welcome_enter_opens_pizza() {
    let (mut app, _) = app_on(Route::Welcome);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_route(), Route::Pizza);
    assert!(app.show_bottom_bar);
}

// ============================================================================
// Dial
// ============================================================================

#[test]
fn test_dial_call_me_dials_fixed_number() {
    let (mut app, dialer) = app_on(Route::Dial);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(dialer.dialed(), vec![DIAL_NUMBER.to_string()]);
    assert_eq!(app.current_route(), Route::Dial);
}

#[test]
fn test_dial_failure_is_swallowed() {
    let (mut app, dialer) = app_on(Route::Dial);
    dialer.set_should_fail(true);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(dialer.dialed().len(), 2);
    assert!(!app.should_quit);
    assert_eq!(app.current_route(), Route::Dial);
}

#[test]
fn test_dial_slider_and_checkbox() {
    let (mut app, _) = app_on(Route::Dial);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);

    let ActiveScreen::Dial(screen) = app.shell.active() else {
        panic!("expected dial screen");
    };
    assert!((screen.slider() - 0.6).abs() < 1e-4);
    assert_eq!(screen.slider_label(), "Slider value: 0.60");

    // Untick the checkbox; the slider stops moving.
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Left);

    let ActiveScreen::Dial(screen) = app.shell.active() else {
        panic!("expected dial screen");
    };
    assert_eq!(screen.focus(), DialFocus::Slider);
    assert!(!screen.slider_enabled());
    assert!((screen.slider() - 0.6).abs() < 1e-4);
}

// ============================================================================
// Settings dialog
// ============================================================================

#[test]
fn test_settings_dialog_round_trip() {
    let (mut app, _) = app_on(Route::Pizza);
    press_ctrl(&mut app, 's');
    assert!(app.settings_dialog.is_open());

    press(&mut app, KeyCode::Enter); // dark mode on
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // notifications off
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right); // clamps at the top stop
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // Done

    assert!(!app.settings_dialog.is_open());
    assert!(app.settings.dark_mode());
    assert!(!app.settings.notifications());
    assert_eq!(app.settings.font_size(), 2.0);
    assert_eq!(app.current_route(), Route::Pizza);
}

#[test]
fn test_settings_persist_across_navigation() {
    let (mut app, _) = app_on(Route::Pizza);
    press_ctrl(&mut app, 's');
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(!app.settings_dialog.is_open());

    app.navigate_to(Route::About);
    app.navigate_back();
    assert!(app.settings.dark_mode());
}

#[test]
fn test_settings_dialog_blocks_screen_input() {
    let (mut app, _) = app_on(Route::Pizza);
    press_ctrl(&mut app, 's');
    type_str(&mut app, "42");
    press(&mut app, KeyCode::Esc);
    assert_eq!(pizza(&app).people(), "");
}
