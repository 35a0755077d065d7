#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::message::{Message, MessageOptions};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    pub const TEST_CONTENT: &str = "**Deploy finished**\n**Status:** green\n- api\n- worker\n1. verify logs\n\n⚠️ cache was cleared";
    pub const TEST_TIMESTAMP: &str = "2024-03-05T15:45:00";

    pub fn test_message(is_typing: bool) -> Message {
        Message::new(MessageOptions {
            content: TEST_CONTENT.to_string(),
            timestamp: Some(TEST_TIMESTAMP.to_string()),
            is_typing,
        })
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn render_app(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
