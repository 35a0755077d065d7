//! Fragment rendering
//!
//! Turns classified fragments into styled ratatui lines, one line per fragment.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::classifier::Fragment;

/// Colour for headers and list markers
pub const ACCENT_COLOR: Color = Color::Cyan;
/// Colour for warning callouts
pub const WARNING_COLOR: Color = Color::Yellow;

const BULLET_MARKER: &str = "  • ";
const WARNING_MARKER: &str = "⚠ ";

/// Render a single fragment as one styled line
pub fn render_fragment(fragment: &Fragment) -> Line<'static> {
    match fragment {
        Fragment::Header { text } => Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Fragment::LabeledHeader { label, trailing } => Line::from(vec![
            Span::styled(label.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(trailing.clone()),
        ]),
        Fragment::BulletItem { text } => Line::from(vec![
            Span::styled(BULLET_MARKER, Style::default().fg(ACCENT_COLOR)),
            Span::raw(text.clone()),
        ]),
        Fragment::NumberedItem { index, text } => Line::from(vec![
            Span::styled(
                format!("  {}. ", index),
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(text.clone()),
        ]),
        Fragment::Warning { text } => Line::from(vec![
            Span::styled(WARNING_MARKER, Style::default().fg(WARNING_COLOR)),
            Span::styled(text.clone(), Style::default().fg(WARNING_COLOR)),
        ]),
        Fragment::Blank => Line::default(),
        Fragment::Plain { text } => Line::from(Span::raw(text.clone())),
    }
}

/// Render fragments in order
pub fn render_fragments(fragments: &[Fragment]) -> Vec<Line<'static>> {
    fragments.iter().map(render_fragment).collect()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
