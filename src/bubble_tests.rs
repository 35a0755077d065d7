//! Tests for bubble state selection

use super::*;
use crate::message::MessageOptions;

fn message(content: &str, timestamp: Option<&str>, is_typing: bool) -> Message {
    Message::new(MessageOptions {
        content: content.to_string(),
        timestamp: timestamp.map(str::to_string),
        is_typing,
    })
}

#[test]
fn test_typing_message_becomes_typing_bubble() {
    let bubble = Bubble::from_message(&message("ignored", Some("2024-03-05"), true));

    assert_eq!(bubble, Bubble::Typing);
    assert!(bubble.is_typing());
}

#[test]
fn test_typing_bubble_ignores_content_and_timestamp() {
    let a = Bubble::from_message(&message("**A**", Some("2024-03-05T10:00:00"), true));
    let b = Bubble::from_message(&message("something else", None, true));

    assert_eq!(a, b);
}

#[test]
fn test_settled_bubble_classifies_content() {
    let bubble = Bubble::from_message(&message(
        "**A**\n- b\n1. c\n\nplain",
        Some("2024-03-05T15:45:00"),
        false,
    ));

    let Bubble::Settled {
        timestamp,
        fragments,
    } = bubble
    else {
        panic!("expected settled bubble");
    };

    assert_eq!(timestamp.as_deref(), Some("2024-03-05T15:45:00"));
    assert_eq!(
        fragments.iter().map(Fragment::kind).collect::<Vec<_>>(),
        vec!["header", "bullet", "numbered", "blank", "plain"]
    );
}

#[test]
fn test_settled_without_timestamp() {
    let bubble = Bubble::from_message(&message("hi", None, false));

    assert!(!bubble.is_typing());
    assert!(matches!(bubble, Bubble::Settled { timestamp: None, .. }));
}
