//! Command-line interface
//!
//! Reads one message from a file or stdin, either as raw text or as a JSON
//! message object.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::BubbleError;
use crate::markup::classify_content;
use crate::message::{Message, MessageOptions};

/// Width used when printing a bubble without a terminal
pub const DEFAULT_PRINT_WIDTH: u16 = 72;

#[derive(Debug, Parser)]
#[command(name = "aibubble", version, about = "Show an AI assistant reply as a chat bubble")]
pub struct Cli {
    /// Message file; reads stdin when absent or "-"
    pub file: Option<PathBuf>,

    /// Parse input as a JSON message: {"content", "timestamp", "isTyping"}
    #[arg(long)]
    pub json: bool,

    /// Timestamp for raw text input (defaults to now)
    #[arg(long, value_name = "TS")]
    pub timestamp: Option<String>,

    /// Show the typing placeholder instead of the message
    #[arg(long)]
    pub typing: bool,

    /// Print the bubble once as plain text instead of opening the viewer
    #[arg(long, conflicts_with = "fragments")]
    pub print: bool,

    /// Print the classified lines as JSON, one per line
    #[arg(long)]
    pub fragments: bool,

    /// Width used with --print
    #[arg(long, default_value_t = DEFAULT_PRINT_WIDTH)]
    pub width: u16,
}

impl Cli {
    /// Read the input and build the message it describes
    pub fn load_message(&self) -> Result<Message, BubbleError> {
        let input = match self.file.as_deref() {
            Some(path) if path != Path::new("-") => {
                log::debug!("Reading message from {}", path.display());
                fs::read_to_string(path)?
            }
            _ => {
                log::debug!("Reading message from stdin");
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                input
            }
        };

        self.message_from_input(input)
    }

    /// Build a message from already-read input
    pub fn message_from_input(&self, input: String) -> Result<Message, BubbleError> {
        let message = if self.json {
            Message::from_json(&input)?
        } else {
            let timestamp = self
                .timestamp
                .clone()
                .unwrap_or_else(|| chrono::Local::now().to_rfc3339());
            // Line terminators at the end of a file are not part of the reply
            let content = input.trim_end_matches(['\r', '\n']).to_string();
            Message::new(MessageOptions {
                content,
                timestamp: Some(timestamp),
                is_typing: false,
            })
        };

        Ok(if self.typing {
            message.with_typing(true)
        } else {
            message
        })
    }
}

/// Classified lines of a message as JSON lines
pub fn fragments_json(message: &Message) -> Result<String, BubbleError> {
    let lines = classify_content(message.content())
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
