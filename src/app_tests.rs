//! Tests for the interactive viewer

use super::*;
use crate::test_utils::test_helpers::{key, key_with_mods, render_app, test_message};

#[test]
fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = App::new(test_message(false), ConfigResult::default());
        app.handle_key(event);
        assert!(app.should_quit());
    }
}

#[test]
fn test_plain_c_does_not_quit() {
    let mut app = App::new(test_message(false), ConfigResult::default());
    app.handle_key(key(KeyCode::Char('c')));
    assert!(!app.should_quit());
}

#[test]
fn test_toggle_typing_switches_state() {
    let mut app = App::new(test_message(false), ConfigResult::default());
    assert!(!app.bubble().is_typing());

    app.handle_key(key(KeyCode::Char('t')));
    assert!(app.bubble().is_typing());

    app.handle_key(key(KeyCode::Char('t')));
    assert!(!app.bubble().is_typing());
}

#[test]
fn test_tick_only_advances_while_typing() {
    let mut app = App::new(test_message(false), ConfigResult::default());
    app.on_tick();
    assert_eq!(app.tick(), 0);

    app.handle_key(key(KeyCode::Char('t')));
    app.on_tick();
    app.on_tick();
    assert_eq!(app.tick(), 2);

    app.handle_key(key(KeyCode::Char('t')));
    assert_eq!(app.tick(), 0);
}

#[test]
fn test_render_settled() {
    let app = App::new(test_message(false), ConfigResult::default());
    let output = render_app(&app, 80, 20);

    assert!(output.contains("AI Assistant"));
    assert!(output.contains("Deploy finished"));
    assert!(output.contains("q quit"));
}

#[test]
fn test_render_typing() {
    let app = App::new(test_message(true), ConfigResult::default());
    let output = render_app(&app, 80, 20);

    assert!(output.contains("Thinking"));
    assert!(!output.contains("Deploy finished"));
}

#[test]
fn test_render_shows_config_warning() {
    let config_result = ConfigResult {
        config: Config::default(),
        warning: Some("Invalid config".to_string()),
    };
    let app = App::new(test_message(false), config_result);
    let output = render_app(&app, 80, 20);

    assert!(output.contains("Invalid config"));
}
