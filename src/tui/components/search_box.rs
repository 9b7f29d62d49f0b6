//! # SearchBox Component
//!
//! Search field under the nav bar. Every edit emits `Changed` with the full
//! buffer; the main loop hands that to the debouncer, so a burst of typing
//! turns into a single search.
//!
//! ## State Management
//!
//! The buffer and focus flag are internal state. Focus is toggled by the
//! parent (`/` enters search mode); Enter or Esc emits `Done`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Press / to search titles";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Buffer changed; carries the new contents
    Changed(String),
    /// User left the field (Enter or Esc)
    Done,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().title(" Search ").border_style(border);

        let line = if self.buffer.is_empty() && !self.focused {
            Line::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Line::raw(self.buffer.as_str())
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused {
            let max_x = area.x + area.width.saturating_sub(2);
            let x = (area.x + 1 + self.buffer.width() as u16).min(max_x);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                // Nothing to delete: no search either.
                self.buffer.pop()?;
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Submit | TuiEvent::Escape => {
                self.focused = false;
                Some(SearchEvent::Done)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_full_buffer() {
        let mut search = SearchBox::new();
        search.focused = true;

        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('s')),
            Some(SearchEvent::Changed("s".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('t')),
            Some(SearchEvent::Changed("st".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("s".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_and_escape_finish() {
        let mut search = SearchBox::new();
        search.focused = true;
        assert_eq!(search.handle_event(&TuiEvent::Submit), Some(SearchEvent::Done));
        assert!(!search.focused);

        search.focused = true;
        assert_eq!(search.handle_event(&TuiEvent::Escape), Some(SearchEvent::Done));
        assert!(!search.focused);
    }

    #[test]
    fn test_navigation_keys_ignored() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(search.handle_event(&TuiEvent::NextTab), None);
        assert!(search.buffer.is_empty());
    }

    #[test]
    fn test_placeholder_when_idle() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut search = SearchBox::new();
        terminal.draw(|f| search.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Search"));
        assert!(text.contains("Press / to search"));
    }
}
