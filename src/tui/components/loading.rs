//! # LoadingIndicator Component
//!
//! Spinner shown while the catalog batch is in flight.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingIndicator {
    /// Animation tick; any value, wrapped internally.
    pub frame: usize,
}

impl LoadingIndicator {
    pub fn text(&self) -> String {
        format!("{} Loading content...", SPINNER[self.frame % SPINNER.len()])
    }
}

impl Component for LoadingIndicator {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(
            Line::styled(self.text(), Style::default().fg(Color::Yellow)).centered(),
            middle,
        );
    }
}
