//! Lightweight line markup for assistant replies
//!
//! Each line of a reply is classified on its own into a [`Fragment`] and then
//! rendered to a styled terminal line.

pub mod classifier;
pub mod render;

// Re-export main types
pub use classifier::{Fragment, classify_content, classify_line};
pub use render::{render_fragment, render_fragments};
