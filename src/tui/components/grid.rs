//! # Grid Component
//!
//! Full-page card grid used by Discover, Live TV, On Demand and search
//! results. Columns follow the terminal width; rows scroll so the selected
//! card stays on screen.
//!
//! The column count is written back into `columns` during render so the
//! event handler can move the selection a full row up or down.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::view::GridView;
use crate::tui::component::Component;
use crate::tui::components::card::{CARD_HEIGHT, CARD_WIDTH, Card};

const HEADER_HEIGHT: u16 = 3;

pub struct Grid<'g, 'a> {
    pub view: &'g GridView<'a>,
    pub selected: usize,
    /// Columns used by the last render (State)
    pub columns: &'g mut usize,
}

/// Cards per row for a given width, at least one.
pub fn columns_for(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

impl Component for Grid<'_, '_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = vec![
            Line::styled(
                self.view.heading.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                self.view.subheading.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(
            Paragraph::new(header),
            Rect {
                height: HEADER_HEIGHT.min(area.height),
                ..area
            },
        );

        let body = Rect {
            y: area.y + HEADER_HEIGHT.min(area.height),
            height: area.height.saturating_sub(HEADER_HEIGHT),
            ..area
        };
        let columns = columns_for(body.width);
        *self.columns = columns;
        if self.view.items.is_empty() || body.height < CARD_HEIGHT {
            return;
        }

        let visible_rows = (body.height / CARD_HEIGHT) as usize;
        let selected_row = self.selected / columns;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        for (i, item) in self
            .view
            .items
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take(visible_rows * columns)
        {
            let row = i / columns - first_row;
            let col = i % columns;
            let cell = Rect {
                x: body.x + col as u16 * CARD_WIDTH,
                y: body.y + row as u16 * CARD_HEIGHT,
                width: CARD_WIDTH.min(body.width),
                height: CARD_HEIGHT,
            };
            Card::new(item, self.view.series, i == self.selected).render(frame, cell);
        }
    }
}
