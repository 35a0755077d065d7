//! Terminal chat bubble for AI assistant replies
//!
//! A reply is split into lines, each line is classified into a [`Fragment`]
//! (header, labeled header, bullet, numbered item, warning, blank or plain),
//! and the result is drawn as a bubble with the assistant's avatar, name,
//! timestamp and footer. While a reply is pending the bubble shows a typing
//! indicator instead.
//!
//! ```no_run
//! use aibubble::{Bubble, BubbleView, Config, Message, MessageOptions, render_to_string};
//!
//! let message = Message::new(MessageOptions {
//!     content: "**Done**\n- all checks passed".to_string(),
//!     timestamp: Some("2024-03-05T15:45:00Z".to_string()),
//!     is_typing: false,
//! });
//! let config = Config::default();
//! let bubble = Bubble::from_message(&message);
//! println!("{}", render_to_string(BubbleView::new(&bubble, &config), 60));
//! ```

pub mod app;
pub mod bubble;
pub mod cli;
pub mod config;
pub mod error;
pub mod markup;
pub mod message;
pub mod timestamp;

mod test_utils;

pub use bubble::{Bubble, BubbleView, render_to_string};
pub use config::Config;
pub use error::BubbleError;
pub use markup::{Fragment, classify_content, classify_line, render_fragment};
pub use message::{Message, MessageOptions};
pub use timestamp::format_timestamp;
