//! # DetailPage Component
//!
//! Full-page view of one movie or show: title, fixed meta line, ratings,
//! overview, image references, availability and cast. Scrolls vertically;
//! the offset lives in `TuiState` and is clamped here on every render since
//! the maximum depends on the wrap width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use reqwest::Url;

use crate::core::item::Item;
use crate::tui::component::Component;

const POSTER_PLACEHOLDER: &str = "https://placehold.co/300x450/000000/FFFFFF";
const PROFILE_PLACEHOLDER: &str = "https://placehold.co/50x50/cccccc/333333?text=N/A";

pub struct DetailPage<'a> {
    pub item: &'a Item,
    /// Vertical scroll offset (State)
    pub scroll: &'a mut u16,
}

/// Poster path when present, otherwise a placeholder image labelled with the title.
pub fn poster_reference(item: &Item) -> String {
    if let Some(path) = item.poster_path.as_deref().filter(|p| !p.is_empty()) {
        return path.to_string();
    }
    let label = if item.title.is_empty() {
        "No Title"
    } else {
        item.title.as_str()
    };
    match Url::parse_with_params(POSTER_PLACEHOLDER, &[("text", label)]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::warn!("Could not build placeholder poster URL: {e}");
            POSTER_PLACEHOLDER.to_string()
        }
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

/// `(stars, thumbs, heart)` labels; zero and missing values read "N/A".
pub fn rating_labels(item: &Item) -> (String, String, String) {
    let vote = item.vote_average.filter(|v| *v != 0.0);
    let popularity = Some(item.popularity).filter(|p| *p != 0.0);
    (
        or_na(vote.map(|v| format!("{v:.1}"))),
        or_na(vote.map(|v| format!("{:.0}", v * 10.0))),
        or_na(popularity.map(|p| format!("{p:.0}"))),
    )
}

pub fn detail_lines(item: &Item) -> Vec<Line<'static>> {
    let title = if item.title.is_empty() {
        "Untitled".to_string()
    } else {
        item.title.clone()
    };
    let section_title = if item.title.is_empty() {
        "This Title".to_string()
    } else {
        item.title.clone()
    };
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let (stars, thumbs, heart) = rating_labels(item);

    let mut lines = vec![
        Line::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled("Directed by N/A", dim),
        Line::raw("PG · 2h 5m · N/A · Action, Adventure, and more"),
        Line::from(vec![
            Span::styled(format!("★ {stars}"), Style::default().fg(Color::Yellow)),
            Span::raw("   "),
            Span::raw(format!("👍 {thumbs}%")),
            Span::raw("   "),
            Span::styled(format!("♥ {heart}%"), Style::default().fg(Color::Red)),
        ]),
        Line::styled("[+ Add to Watchlist]", Style::default().fg(Color::Cyan)),
        Line::default(),
    ];

    if item.overview.is_empty() {
        lines.push(Line::raw("No description available."));
    } else {
        lines.push(Line::raw(item.overview.clone()));
    }
    lines.push(Line::default());

    lines.push(Line::styled(format!("Poster: {}", poster_reference(item)), dim));
    let backdrop = item
        .backdrop_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or("none");
    lines.push(Line::styled(format!("Backdrop: {backdrop}"), dim));
    lines.push(Line::default());

    lines.push(Line::styled(format!("Where to Watch {section_title}"), heading));
    lines.push(Line::raw(
        "There are no locations currently available for this title",
    ));
    lines.push(Line::default());

    if item.casts.is_empty() {
        lines.push(Line::raw("Cast information not available."));
    } else {
        lines.push(Line::styled(format!("Cast of {section_title}"), heading));
        for member in &item.casts {
            let name = member.name.as_deref().unwrap_or("Unknown");
            let profile = member.profile_path.as_deref().unwrap_or(PROFILE_PLACEHOLDER);
            lines.push(Line::from(vec![
                Span::raw(format!("• {name}  ")),
                Span::styled(profile.to_string(), dim),
            ]));
        }
    }
    lines
}

/// Rows `lines` take when wrapped to `width` columns.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    let width = (width as usize).max(1);
    lines
        .iter()
        .map(|line| {
            let text = line.to_string();
            if text.is_empty() {
                1
            } else {
                textwrap::wrap(&text, width).len()
            }
        })
        .sum()
}

impl Component for DetailPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = detail_lines(self.item);
        let total = wrapped_height(&lines, area.width);
        let max_scroll = total.saturating_sub(area.height as usize);
        *self.scroll = (*self.scroll).min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((*self.scroll, 0)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::CastMember;
    use crate::test_support::{movie, rated};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_detail_sections_in_order() {
        let item = rated(1, "Heat", 7.3);
        let text = text_of(&detail_lines(&item));

        let order = [
            "Heat",
            "Directed by N/A",
            "PG · 2h 5m · N/A · Action, Adventure, and more",
            "★ 7.3",
            "Add to Watchlist",
            "Overview for movie 1.",
            "Poster: https://img.example/1.jpg",
            "Where to Watch Heat",
            "There are no locations currently available for this title",
            "Cast information not available.",
        ];
        let mut last = 0;
        for needle in order {
            let at = text[last..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            last += at;
        }
    }

    #[test]
    fn test_rating_labels() {
        let mut item = rated(1, "Heat", 7.6);
        item.popularity = 56.4;
        assert_eq!(
            rating_labels(&item),
            ("7.6".to_string(), "76".to_string(), "56".to_string())
        );

        let mut blank = movie(2, "Blank");
        blank.popularity = 0.0;
        assert_eq!(
            rating_labels(&blank),
            ("N/A".to_string(), "N/A".to_string(), "N/A".to_string())
        );

        let zero = rated(3, "Zero", 0.0);
        assert_eq!(rating_labels(&zero).0, "N/A");
    }

    #[test]
    fn test_placeholder_poster_uses_title() {
        let mut item = movie(1, "Blade Runner");
        item.poster_path = None;
        let url = poster_reference(&item);
        assert!(url.starts_with("https://placehold.co/300x450/000000/FFFFFF?text="));
        assert!(url.contains("Blade"));

        item.title.clear();
        assert!(poster_reference(&item).contains("No+Title"));
    }

    #[test]
    fn test_empty_overview_and_cast() {
        let mut item = movie(1, "Heat");
        item.overview.clear();
        item.casts = vec![
            CastMember {
                name: Some("Al Pacino".to_string()),
                profile_path: None,
            },
            CastMember {
                name: None,
                profile_path: None,
            },
        ];
        let text = text_of(&detail_lines(&item));
        assert!(text.contains("No description available."));
        assert!(text.contains("Cast of Heat"));
        assert!(text.contains("• Al Pacino"));
        assert!(text.contains("• Unknown"));
        assert!(text.contains(PROFILE_PLACEHOLDER));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let item = movie(1, "Heat");
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut scroll = u16::MAX;
        terminal
            .draw(|f| {
                DetailPage {
                    item: &item,
                    scroll: &mut scroll,
                }
                .render(f, f.area())
            })
            .unwrap();
        let total = wrapped_height(&detail_lines(&item), 60);
        assert_eq!(scroll as usize, total - 10);
    }
}
