//! # NoticeToast Component
//!
//! Transient message box drawn over the top of the main area. Expiry is
//! handled by the main loop; this only draws the current notice.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{Notice, NoticeKind};
use crate::tui::component::Component;

pub struct NoticeToast<'a> {
    pub notice: &'a Notice,
}

/// Box sized to the message, centred horizontally at the top of `area`.
pub fn toast_area(message: &str, area: Rect) -> Rect {
    let width = (message.width() as u16 + 4).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1.min(area.height),
        width,
        height: 3.min(area.height.saturating_sub(1)),
    }
}

impl Component for NoticeToast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = match self.notice.kind {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Error => Color::Red,
        };
        let toast = toast_area(&self.notice.message, area);
        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(self.notice.message.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().border_style(Style::default().fg(color)))
                .style(Style::default().fg(color)),
            toast,
        );
    }
}
