//! # Card Component
//!
//! A single poster card: title plus release year. Shared by home shelves and
//! full-page grids. Terminals can't show the poster image, so the card is
//! text only; the detail page lists the image references.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::item::Item;
use crate::tui::component::Component;

/// Card footprint, borders included.
pub const CARD_WIDTH: u16 = 22;
pub const CARD_HEIGHT: u16 = 4;

pub struct Card<'a> {
    pub item: &'a Item,
    /// Live TV cards get a "TV Series: " prefix.
    pub series: bool,
    pub selected: bool,
}

impl<'a> Card<'a> {
    pub fn new(item: &'a Item, series: bool, selected: bool) -> Self {
        Self {
            item,
            series,
            selected,
        }
    }

    pub fn title(&self) -> String {
        let base = if self.item.title.is_empty() {
            "Untitled"
        } else {
            self.item.title.as_str()
        };
        if self.series {
            format!("TV Series: {base}")
        } else {
            base.to_string()
        }
    }
}

impl Component for Card<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(truncate_to_width(&self.title(), inner_width)),
            Line::from(format!("Year: {}", self.item.year_label()))
                .style(Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(card_block(self.selected)),
            area,
        );
    }
}

/// The trailing "View All" card on a home shelf.
pub struct ViewAllCard {
    pub selected: bool,
}

impl Component for ViewAllCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![Line::from("☷").centered(), Line::from("View All").centered()];
        frame.render_widget(
            Paragraph::new(lines).block(card_block(self.selected)),
            area,
        );
    }
}

fn card_block(selected: bool) -> Block<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::bordered().border_style(style).style(style)
}

/// Cuts `text` to `max_width` display columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
