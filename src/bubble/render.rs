//! Bubble rendering
//!
//! Draws a bubble as a rounded block:
//! ```text
//! ╭ AI  AI Assistant ───────── 3:45 PM ╮
//! │Title                               │
//! │  • item                            │
//! ╰── AI-generated response. Verify ───╯
//! ```
//! The typing state keeps the avatar and persona label and replaces the body
//! with an animated indicator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::Bubble;
use crate::config::Config;
use crate::markup::render_fragments;
use crate::timestamp::format_timestamp;

/// Number of animation frames of the typing indicator
pub const TYPING_FRAMES: u64 = 4;
pub const THINKING_LABEL: &str = "Thinking";

const PERSONA_COLOR: Color = Color::Green;
const MUTED_COLOR: Color = Color::DarkGray;
const TYPING_COLOR: Color = Color::Yellow;

/// Border columns or rows (one on each side)
const BORDER_SIZE: u16 = 2;
/// Corners plus the padding spaces around each title
const TITLE_PADDING: usize = 4;

/// Widget that draws one bubble
#[derive(Debug, Clone, Copy)]
pub struct BubbleView<'a> {
    bubble: &'a Bubble,
    config: &'a Config,
    tick: u64,
}

impl<'a> BubbleView<'a> {
    pub fn new(bubble: &'a Bubble, config: &'a Config) -> Self {
        Self {
            bubble,
            config,
            tick: 0,
        }
    }

    /// Animation tick for the typing indicator
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn persona_title(&self) -> Line<'static> {
        let persona = &self.config.persona;
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", persona.avatar),
                Style::default()
                    .fg(Color::Black)
                    .bg(PERSONA_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                persona.name.clone(),
                Style::default()
                    .fg(PERSONA_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ])
    }

    fn formatted_timestamp(&self) -> Option<String> {
        match self.bubble {
            Bubble::Typing => None,
            Bubble::Settled { timestamp, .. } => Some(format_timestamp(
                timestamp.as_deref(),
                self.config.display.clock,
            )),
        }
    }

    fn footer(&self) -> Option<&str> {
        let footer = self.config.persona.footer.as_str();
        (!self.bubble.is_typing() && !footer.is_empty()).then_some(footer)
    }

    fn typing_indicator(&self) -> Line<'static> {
        let dots = (self.tick % TYPING_FRAMES) as usize;
        Line::from(vec![
            Span::styled("⏳ ", Style::default().fg(TYPING_COLOR)),
            Span::styled(
                format!("{}{:<3}", THINKING_LABEL, ".".repeat(dots)),
                Style::default()
                    .fg(TYPING_COLOR)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    }

    /// Body lines inside the border
    pub fn body_lines(&self) -> Vec<Line<'static>> {
        match self.bubble {
            Bubble::Typing => vec![self.typing_indicator()],
            Bubble::Settled { fragments, .. } => render_fragments(fragments),
        }
    }

    fn block(&self) -> Block<'static> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PERSONA_COLOR))
            .title(self.persona_title());

        if let Some(timestamp) = self.formatted_timestamp() {
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(timestamp, Style::default().fg(MUTED_COLOR)),
                Span::raw(" "),
            ]);
            block = block.title_top(line.right_aligned());
        }

        if let Some(footer) = self.footer() {
            let line = Line::from(vec![Span::styled(
                format!(" {} ", footer),
                Style::default()
                    .fg(MUTED_COLOR)
                    .add_modifier(Modifier::ITALIC),
            )]);
            block = block.title_bottom(line.centered());
        }

        block
    }

    fn body(&self) -> Paragraph<'static> {
        Paragraph::new(self.body_lines()).wrap(Wrap { trim: false })
    }

    /// Width that fits the titles and the longest body line without wrapping
    pub fn preferred_width(&self) -> u16 {
        let persona = &self.config.persona;
        // " " + " avatar " + " " + name + " "
        let persona_width = persona.avatar.width() + persona.name.width() + 5;
        let timestamp_width = self
            .formatted_timestamp()
            .map_or(0, |ts| ts.width() + 2);
        let header_width = persona_width + timestamp_width + TITLE_PADDING;

        let footer_width = self.footer().map_or(0, |f| f.width() + TITLE_PADDING);

        let body_width = self
            .body_lines()
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or(0)
            + BORDER_SIZE as usize;

        let width = header_width.max(footer_width).max(body_width);
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Rows needed to draw the whole bubble at the given width
    pub fn required_height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(BORDER_SIZE);
        let body_rows = self.body().line_count(inner_width);
        u16::try_from(body_rows)
            .unwrap_or(u16::MAX)
            .saturating_add(BORDER_SIZE)
    }
}

impl Widget for BubbleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        self.body().render(inner, buf);
    }
}

/// Render a bubble off-screen and return its rows as plain text
///
/// Styling is dropped and trailing spaces are trimmed from each row.
pub fn render_to_string(view: BubbleView<'_>, width: u16) -> String {
    let height = view.required_height(width);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf);

    (area.top()..area.bottom())
        .map(|y| {
            let mut row = String::new();
            let mut skip = 0;
            for x in area.left()..area.right() {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = buf[(x, y)].symbol();
                row.push_str(symbol);
                skip = symbol.width().saturating_sub(1);
            }
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
