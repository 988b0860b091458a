//! App Session Integration Tests
//!
//! Drives a calculator session the way a UI surface does: encoded input
//! frames in, encoded view frames out.

use calc_apps::{CalculatorApp, CalculatorConfig, CalculatorState, InputEvent, Key};

/// Send one encoded event and decode the reply.
fn send(app: &mut CalculatorApp, event: InputEvent) -> CalculatorState {
    let frame = event.to_bytes().expect("encode input");
    let reply = app.on_message(&frame).expect("handle input");
    CalculatorState::from_bytes(&reply).expect("decode state")
}

fn press_all(app: &mut CalculatorApp, labels: &[&str]) -> CalculatorState {
    let mut state = app.render();
    for label in labels {
        state = send(app, InputEvent::button(*label));
    }
    state
}

#[test]
fn test_keypad_session() {
    let mut app = CalculatorApp::default();

    let state = press_all(&mut app, &["5", "+", "3", "+"]);
    assert_eq!(state.display, "8");
    assert_eq!(state.history, "8 +");

    let state = press_all(&mut app, &["2", "="]);
    assert_eq!(state.display, "10");
    assert_eq!(state.history, "");
    assert!(!state.has_error);
}

#[test]
fn test_keyboard_session_with_named_keys() {
    let mut app = CalculatorApp::default();

    for c in "123".chars() {
        send(&mut app, InputEvent::key(Key::Char(c)));
    }
    let state = send(&mut app, InputEvent::key(Key::Backspace));
    assert_eq!(state.display, "12");

    send(&mut app, InputEvent::key(Key::Char('/')));
    send(&mut app, InputEvent::key(Key::Char('4')));
    let state = send(&mut app, InputEvent::key(Key::Enter));
    assert_eq!(state.display, "3");

    let state = send(&mut app, InputEvent::key(Key::Escape));
    assert_eq!(state, CalculatorState::initial());
}

#[test]
fn test_large_values_are_grouped_and_truncated() {
    let mut app = CalculatorApp::default();
    let state = press_all(
        &mut app,
        &["9", "9", "9", "9", "9", "9", "×", "9", "9", "9", "9", "9", "9", "="],
    );
    // 999999 × 999999 = 999998000001
    assert_eq!(state.display, "999,998,000,001");

    let state = press_all(&mut app, &["×", "1", "0", "0", "="]);
    assert_eq!(state.display, "99,999,800,000,");
    assert_eq!(app.engine().display_value(), "99999800000100");
}

#[test]
fn test_divide_by_zero_session() {
    let mut app = CalculatorApp::default();
    let state = press_all(&mut app, &["7", "÷", "0", "="]);
    assert!(state.has_error);
    assert_eq!(state.display, "Error: Div by 0");

    let state = press_all(&mut app, &["."]);
    assert!(!state.has_error);
    assert_eq!(state.display, "0.");
}

#[test]
fn test_configured_separator() {
    let config = CalculatorConfig::from_json(r#"{"group_separator": " ", "max_display_len": 20}"#)
        .expect("valid config");
    let mut app = CalculatorApp::new(config);

    let state = press_all(&mut app, &["1", "2", "3", "4", "5", "6", "7", ".", "5"]);
    assert_eq!(state.display, "1 234 567.5");
}

#[test]
fn test_unknown_buttons_do_not_change_state() {
    let mut app = CalculatorApp::default();
    press_all(&mut app, &["4", "2"]);

    let state = send(&mut app, InputEvent::button("sqrt"));
    assert_eq!(state.display, "42");
    assert_eq!(app.engine().display_value(), "42");
}
