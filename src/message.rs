//! Message input
//!
//! A message is the only input a bubble needs: its raw text, when it was
//! sent, and whether the assistant is still typing.

use serde::Deserialize;

use crate::error::BubbleError;

/// Construction options, also the JSON shape of a message
///
/// ```json
/// {"content": "**Done**\n- all good", "timestamp": "2024-03-05T15:45:00Z", "isTyping": false}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub is_typing: bool,
}

/// A single assistant message, immutable for the duration of a render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
    timestamp: Option<String>,
    is_typing: bool,
}

impl Message {
    pub fn new(options: MessageOptions) -> Self {
        Self {
            content: options.content,
            timestamp: options.timestamp,
            is_typing: options.is_typing,
        }
    }

    /// Parse a message from its JSON form
    pub fn from_json(json: &str) -> Result<Self, BubbleError> {
        let options: MessageOptions = serde_json::from_str(json)?;
        Ok(Self::new(options))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Same message with the typing flag replaced
    pub fn with_typing(self, is_typing: bool) -> Self {
        Self { is_typing, ..self }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod message_tests;
