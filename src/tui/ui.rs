use crate::core::state::App;
use crate::core::view::PageView;
use crate::tui::component::Component;
use crate::tui::components::shelf::{SHELF_HEIGHT, window_start};
use crate::tui::components::{
    DetailPage, Grid, LoadingIndicator, NavBar, NoticeToast, Shelf,
};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [nav_area, search_area, main_area, help_area] = layout.areas(frame.area());

    NavBar::new(app.view.page()).render(frame, nav_area);
    tui.search_box.focused = tui.input_mode == InputMode::Search;
    tui.search_box.render(frame, search_area);

    // A failed load keeps the banner above whatever page is showing
    let page_area = match &app.error {
        Some(error_msg) => {
            let [banner_area, rest] = Layout::vertical([Length(3), Min(0)]).areas(main_area);
            draw_error_view(frame, banner_area, error_msg);
            rest
        }
        None => main_area,
    };

    match app.page_view() {
        PageView::Loading => LoadingIndicator {
            frame: spinner_frame,
        }
        .render(frame, page_area),
        PageView::Home(sections) => {
            let visible = (page_area.height / SHELF_HEIGHT).max(1) as usize;
            let first = window_start(tui.home_row, visible);
            for (offset, (row, section)) in sections
                .iter()
                .enumerate()
                .skip(first)
                .take(visible)
                .enumerate()
            {
                let y = page_area.y + offset as u16 * SHELF_HEIGHT;
                if y >= page_area.bottom() {
                    break;
                }
                let area = Rect {
                    y,
                    height: SHELF_HEIGHT.min(page_area.bottom() - y),
                    ..page_area
                };
                let selected = (row == tui.home_row).then_some(tui.home_col);
                Shelf::new(section, selected).render(frame, area);
            }
        }
        PageView::Grid(view) => Grid {
            view: &view,
            selected: tui.grid_selected,
            columns: &mut tui.grid_columns,
        }
        .render(frame, page_area),
        PageView::Detail(item) => DetailPage {
            item,
            scroll: &mut tui.detail_scroll,
        }
        .render(frame, page_area),
    }

    if let Some(notice) = &app.notice {
        NoticeToast { notice }.render(frame, page_area);
    }

    draw_help_line(frame, help_area, app, tui.input_mode);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn help_text(app: &App, mode: InputMode) -> &'static str {
    if mode == InputMode::Search {
        return "Type to search · Enter/Esc done";
    }
    if app.view.allows_scroll() {
        "Esc/Backspace back · PgUp/PgDn scroll · Alt+→ forward · q quit"
    } else {
        "1-4 tabs · arrows move · Enter open · / search · s sign in · Backspace back · q quit"
    }
}

fn draw_help_line(frame: &mut Frame, area: Rect, app: &App, mode: InputMode) {
    frame.render_widget(
        Line::styled(help_text(app, mode), Style::default().fg(Color::DarkGray)),
        area,
    );
}
