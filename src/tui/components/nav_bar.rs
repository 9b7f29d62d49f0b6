//! # NavBar Component
//!
//! Top line: app name, the four page tabs and the Sign In entry.
//!
//! ## Design Decisions
//!
//! Stateless, props-in-struct. The active tab comes from the resolved
//! `Page`; on a detail page no tab is highlighted, so the user can still see
//! where `Tab`/`Shift+Tab` will start cycling from (Home).
//!
//! Tabs carry their number key as a hint (`1 Home`, `2 Live TV`, ...) in
//! `Page::TABS` order, which is also the order `1`-`4` select.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::route::Page;
use crate::tui::component::Component;

pub struct NavBar {
    /// Current page (Prop)
    pub page: Page,
}

impl NavBar {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                " MARQUEE ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for (i, tab) in Page::TABS.iter().enumerate() {
            let style = if *tab == self.page {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{} {}", i + 1, tab.label()), style));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled("[s] Sign In", Style::default().fg(Color::Cyan)));
        Line::from(spans)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
