//! # Shelf Component
//!
//! One home-page section: a title line followed by a single row of cards and
//! a trailing View All card. Only the cards that fit are drawn; the window
//! slides so the selected column stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::core::sections::Section;
use crate::tui::component::Component;
use crate::tui::components::card::{CARD_HEIGHT, CARD_WIDTH, Card, ViewAllCard};

/// Title line plus one card row.
pub const SHELF_HEIGHT: u16 = CARD_HEIGHT + 1;

pub struct Shelf<'s, 'a> {
    pub section: &'s Section<'a>,
    /// Selected column when this shelf holds the cursor. Column
    /// `items.len()` is the View All card.
    pub selected: Option<usize>,
}

impl<'s, 'a> Shelf<'s, 'a> {
    pub fn new(section: &'s Section<'a>, selected: Option<usize>) -> Self {
        Self { section, selected }
    }
}

/// First slot index to draw so `selected` fits in `visible` slots.
pub fn window_start(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    (selected + 1).saturating_sub(visible)
}

impl Component for Shelf<'_, '_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let title_style = if self.selected.is_some() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Line::styled(format!("{} >", self.section.kind.title()), title_style),
            Rect { height: 1, ..area },
        );

        let row = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1).min(CARD_HEIGHT),
            ..area
        };
        let slots = self.section.items.len() + 1;
        let visible = (row.width / CARD_WIDTH).max(1) as usize;
        let first = window_start(self.selected.unwrap_or(0), visible);

        for (offset, slot) in (first..slots).take(visible).enumerate() {
            let cell = Rect {
                x: row.x + offset as u16 * CARD_WIDTH,
                width: CARD_WIDTH.min(row.width),
                ..row
            };
            let selected = self.selected == Some(slot);
            match self.section.items.get(slot) {
                Some(item) => Card::new(item, false, selected).render(frame, cell),
                None => ViewAllCard { selected }.render(frame, cell),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sections::SectionKind;
    use crate::test_support::movies_of;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(section: &Section<'_>, selected: Option<usize>, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, SHELF_HEIGHT)).unwrap();
        terminal
            .draw(|f| Shelf::new(section, selected).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(0, 4), 0);
        assert_eq!(window_start(3, 4), 0);
        assert_eq!(window_start(4, 4), 1);
        assert_eq!(window_start(18, 4), 15);
        assert_eq!(window_start(5, 0), 0);
    }

    #[test]
    fn test_shelf_shows_title_and_first_cards() {
        let movies = movies_of(3);
        let section = Section {
            kind: SectionKind::TrendingNow,
            items: movies.iter().collect(),
        };
        let text = draw(&section, None, CARD_WIDTH * 4);
        assert!(text.contains("Trending Now >"));
        assert!(text.contains("Movie 1"));
        assert!(text.contains("Movie 3"));
        assert!(text.contains("View All"));
    }

    #[test]
    fn test_view_all_scrolls_into_view() {
        let movies = movies_of(10);
        let section = Section {
            kind: SectionKind::TrendingNow,
            items: movies.iter().collect(),
        };
        let idle = draw(&section, None, CARD_WIDTH * 3);
        assert!(!idle.contains("View All"));

        let at_end = draw(&section, Some(10), CARD_WIDTH * 3);
        assert!(at_end.contains("View All"));
        assert!(at_end.contains("Movie 10"));
        assert!(!at_end.contains("Movie 1 "));
    }
}
