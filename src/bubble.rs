//! Assistant message bubble
//!
//! A bubble is either still typing or settled with its classified content.
//! Which one is decided once per render from the message's typing flag.

pub mod layout;
pub mod render;

pub use render::{BubbleView, render_to_string};

use crate::markup::{Fragment, classify_content};
use crate::message::Message;

/// Visual state of a bubble
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bubble {
    /// Reply pending; content and timestamp are not shown
    Typing,
    /// Finished reply
    Settled {
        timestamp: Option<String>,
        fragments: Vec<Fragment>,
    },
}

impl Bubble {
    pub fn from_message(message: &Message) -> Self {
        if message.is_typing() {
            return Bubble::Typing;
        }

        Bubble::Settled {
            timestamp: message.timestamp().map(str::to_string),
            fragments: classify_content(message.content()),
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self, Bubble::Typing)
    }
}

#[cfg(test)]
#[path = "bubble_tests.rs"]
mod bubble_tests;
