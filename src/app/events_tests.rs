//! Tests for key handling

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::PanelState;
use crate::calc::{Control, Distribution};
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

#[test]
fn test_arrow_keys_move_selection() {
    let mut app = test_app();
    assert_eq!(app.selected, Control::MonthlySpend);

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.selected, Control::MonthlyRevenue);

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.selected, Control::MonthlySpend);

    // Wraps around upward
    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.selected, Control::Distribution);
}

#[test]
fn test_vim_keys_move_selection() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('j')));
    assert_eq!(app.selected, Control::MonthlyRevenue);

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.selected, Control::MonthlySpend);
}

#[test]
fn test_left_right_step_selected_field() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.input.monthly_spend, 400);

    app.handle_key_event(key(KeyCode::Left));
    app.handle_key_event(key(KeyCode::Left));
    assert_eq!(app.input.monthly_spend, 300);
}

#[test]
fn test_left_right_cycle_distribution() {
    let mut app = test_app();
    app.selected = Control::Distribution;

    app.handle_key_event(key(KeyCode::Char('l')));
    assert_eq!(app.input.distribution, Distribution::Regional);

    app.handle_key_event(key(KeyCode::Char('h')));
    assert_eq!(app.input.distribution, Distribution::Local);
}

#[test]
fn test_digit_keys_set_distribution() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('3')));
    assert_eq!(app.input.distribution, Distribution::National);
    assert_eq!(app.results.new_revenue, 2400.0);

    app.handle_key_event(key(KeyCode::Char('2')));
    assert_eq!(app.input.distribution, Distribution::Regional);
}

#[test]
fn test_enter_reveals_panel() {
    let mut app = test_app();
    assert_eq!(app.panel, PanelState::Hidden);

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.panel, PanelState::Shown);
}

#[test]
fn test_quit_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());

    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_help_toggle_and_block() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('?')));
    assert!(app.help.visible);

    // Input keys are blocked while help is open
    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.input.monthly_spend, 350);

    // j scrolls instead of moving the selection
    app.handle_key_event(key(KeyCode::Char('j')));
    assert_eq!(app.help.scroll, 1);
    assert_eq!(app.selected, Control::MonthlySpend);

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
    assert!(!app.should_quit());
}

#[test]
fn test_editor_captures_keys() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('e')));
    assert!(app.editor.is_some());

    // q types into the editor instead of quitting
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.editor.is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_editor_commit_via_enter() {
    let mut app = test_app();
    app.selected = Control::HoursPerWeek;

    app.handle_key_event(key(KeyCode::Char('e')));
    // Clear the prefilled "10" and type a new value
    app.handle_key_event(key(KeyCode::Backspace));
    app.handle_key_event(key(KeyCode::Backspace));
    app.handle_key_event(key(KeyCode::Char('2')));
    app.handle_key_event(key(KeyCode::Char('5')));
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.editor.is_none());
    assert_eq!(app.input.hours_per_week, 25);
}

#[test]
fn test_notification_cleared_on_next_key() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('y')));
    assert!(app.notification.current().is_some());

    app.handle_key_event(key(KeyCode::Down));
    assert!(app.notification.current().is_none());
}
