use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::bubble::layout::bubble_area;
use crate::bubble::{Bubble, BubbleView};
use crate::config::{Config, ConfigResult};
use crate::message::Message;

const HINTS: &str = " q quit | t toggle typing ";

/// Application state for the interactive viewer
pub struct App {
    message: Message,
    bubble: Bubble,
    config: Config,
    /// Shown in the status line, e.g. a config warning
    notice: Option<String>,
    tick: u64,
    should_quit: bool,
}

impl App {
    pub fn new(message: Message, config_result: ConfigResult) -> Self {
        let bubble = Bubble::from_message(&message);
        Self {
            message,
            bubble,
            config: config_result.config,
            notice: config_result.warning,
            tick: 0,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn bubble(&self) -> &Bubble {
        &self.bubble
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance the typing animation; settled bubbles do not animate
    pub fn on_tick(&mut self) {
        if self.bubble.is_typing() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('t') => self.toggle_typing(),
            _ => {}
        }
    }

    fn toggle_typing(&mut self) {
        let is_typing = !self.message.is_typing();
        self.message = self.message.clone().with_typing(is_typing);
        self.bubble = Bubble::from_message(&self.message);
        self.tick = 0;
        log::debug!("Typing toggled to {}", is_typing);
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(3),    // Bubble takes the rest of the screen
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        self.render_bubble(frame, layout[0]);
        self.render_status(frame, layout[1]);
    }

    fn render_bubble(&self, frame: &mut Frame, area: Rect) {
        let view = BubbleView::new(&self.bubble, &self.config).tick(self.tick);
        let bubble_rect = bubble_area(area, view.preferred_width(), |width| {
            view.required_height(width)
        });
        frame.render_widget(view, bubble_rect);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(HINTS, Style::default().fg(Color::DarkGray))];
        if let Some(notice) = &self.notice {
            spans.push(Span::styled(
                format!(" {} ", notice),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
