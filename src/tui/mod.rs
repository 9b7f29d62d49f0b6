//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (catalog loading, notice on screen): draws every ~80ms so
//!   the spinner moves and notices expire on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background
//!   actions or terminal resize.
//!
//! ## Background Work
//!
//! Two kinds of tasks feed the action channel: the one-shot catalog load
//! spawned at startup, and the debounced search timer. Both send plain
//! `Action`s that the loop applies with `update()` like any key press.

pub mod component;
pub mod components;
pub mod debounce;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Page;
use crate::core::state::App;
use crate::core::view::PageView;
use crate::source::{HttpCatalogSource, load_catalog};
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBox, SearchEvent};
use crate::tui::debounce::Debouncer;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Lines moved per PageUp/PageDown or wheel step on the detail page.
const SCROLL_STEP: u16 = 5;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys move the selection and switch pages.
    Browse,
    /// Keys edit the search box. Enter or Esc returns to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_mode: InputMode,
    pub search_box: SearchBox,
    // Home page cursor: section row, column within the row
    pub home_row: usize,
    pub home_col: usize,
    // Grid pages
    pub grid_selected: usize,
    pub grid_columns: usize,
    // Detail page
    pub detail_scroll: u16,
    /// Seq of the notice on screen and when it first appeared.
    pub notice_shown: Option<(u64, Instant)>,
    /// Fragment + search query the selections belong to.
    view_key: String,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Browse,
            search_box: SearchBox::new(),
            home_row: 0,
            home_col: 0,
            grid_selected: 0,
            grid_columns: 1,
            detail_scroll: 0,
            notice_shown: None,
            view_key: String::new(),
        }
    }

    /// Resets selections and scroll whenever the page changes underneath us.
    pub fn sync_view(&mut self, app: &App) {
        let key = view_key(app);
        if key != self.view_key {
            debug!("View changed to {key}, resetting selection");
            self.home_row = 0;
            self.home_col = 0;
            self.grid_selected = 0;
            self.detail_scroll = 0;
            self.view_key = key;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

fn view_key(app: &App) -> String {
    let query = app.search.as_ref().map(|s| s.query.as_str()).unwrap_or("");
    format!("{}|{}|{}", app.history.current(), query, app.is_loading)
}

/// Whether the notice `seq` has been on screen for at least `NOTICE_TTL`.
/// A notice seen for the first time starts its clock at `now`.
pub fn notice_expired(shown: &mut Option<(u64, Instant)>, seq: u64, now: Instant) -> bool {
    match *shown {
        Some((shown_seq, since)) if shown_seq == seq => now.duration_since(since) >= NOTICE_TTL,
        _ => {
            *shown = Some((seq, now));
            false
        }
    }
}

/// Maps a Browse-mode event to an action, moving the selection as a side effect.
pub fn handle_browse_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
            None
        }
        TuiEvent::InputChar(c @ '1'..='4') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Page::TABS.get(index).map(|page| Action::Navigate(*page))
        }
        TuiEvent::NextTab | TuiEvent::PrevTab => {
            let len = Page::TABS.len();
            let next = match Page::TABS.iter().position(|p| *p == app.view.page()) {
                Some(i) if *event == TuiEvent::NextTab => (i + 1) % len,
                Some(i) => (i + len - 1) % len,
                None => 0,
            };
            Some(Action::Navigate(Page::TABS[next]))
        }
        TuiEvent::InputChar('s') => Some(Action::SignIn),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::Backspace | TuiEvent::HistoryBack => Some(Action::Back),
        TuiEvent::Escape if app.view.allows_scroll() => Some(Action::Back),
        TuiEvent::HistoryForward => Some(Action::Forward),
        TuiEvent::ScrollUp if app.view.allows_scroll() => {
            tui.detail_scroll = tui.detail_scroll.saturating_sub(SCROLL_STEP);
            None
        }
        TuiEvent::ScrollDown if app.view.allows_scroll() => {
            // Clamped against content height on the next render
            tui.detail_scroll = tui.detail_scroll.saturating_add(SCROLL_STEP);
            None
        }
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::CursorLeft
        | TuiEvent::CursorRight
        | TuiEvent::Submit => move_or_open(app, tui, event),
        _ => None,
    }
}

fn move_or_open(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match app.page_view() {
        PageView::Loading => None,
        PageView::Home(sections) => {
            if sections.is_empty() {
                return None;
            }
            let last_row = sections.len() - 1;
            match event {
                TuiEvent::CursorUp => tui.home_row = tui.home_row.saturating_sub(1),
                TuiEvent::CursorDown => tui.home_row = (tui.home_row + 1).min(last_row),
                TuiEvent::CursorLeft => tui.home_col = tui.home_col.saturating_sub(1),
                TuiEvent::CursorRight => tui.home_col += 1,
                _ => {}
            }
            tui.home_row = tui.home_row.min(last_row);
            let items = &sections[tui.home_row].items;
            // Column `items.len()` is the View All card
            tui.home_col = tui.home_col.min(items.len());
            if *event != TuiEvent::Submit {
                return None;
            }
            match items.get(tui.home_col) {
                Some(item) => Some(Action::OpenItem((*item).clone())),
                None => Some(Action::ViewAll),
            }
        }
        PageView::Grid(view) => {
            if view.items.is_empty() {
                return None;
            }
            let last = view.items.len() - 1;
            let columns = tui.grid_columns.max(1);
            let selected = tui.grid_selected.min(last);
            tui.grid_selected = match event {
                TuiEvent::CursorUp => selected.saturating_sub(columns),
                TuiEvent::CursorDown => (selected + columns).min(last),
                TuiEvent::CursorLeft => selected.saturating_sub(1),
                TuiEvent::CursorRight => (selected + 1).min(last),
                _ => selected,
            };
            match event {
                TuiEvent::Submit => Some(Action::OpenItem(view.items[tui.grid_selected].clone())),
                _ => None,
            }
        }
        PageView::Detail(_) => {
            match event {
                TuiEvent::CursorUp => tui.detail_scroll = tui.detail_scroll.saturating_sub(1),
                TuiEvent::CursorDown => tui.detail_scroll = tui.detail_scroll.saturating_add(1),
                _ => {}
            }
            None
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Starts the one-shot catalog load; the result arrives as `CatalogLoaded`.
fn spawn_load(config: &ResolvedConfig, tx: mpsc::Sender<Action>) {
    info!(
        "Loading catalog from {} ({} pages x {})",
        config.base_url, config.pages, config.per_page
    );
    let source = HttpCatalogSource::new(Some(config.base_url.clone()));
    let (pages, per_page) = (config.pages, config.per_page);
    tokio::spawn(async move {
        let result = load_catalog(&source, pages, per_page).await;
        if tx.send(Action::CatalogLoaded(result)).is_err() {
            warn!("Catalog loaded after the UI exited; dropping result");
        }
    });
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(&config.start_route);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut debouncer = Debouncer::new(config.search_debounce);
    spawn_load(&config, tx.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync_view(&app);

        if let Some(seq) = app.notice.as_ref().map(|n| n.seq)
            && notice_expired(&mut tui.notice_shown, seq, Instant::now())
        {
            update(&mut app, Action::DismissNotice);
            needs_redraw = true;
        }

        let animating = app.is_loading || app.notice.is_some();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = update(&mut app, Action::Quit) == Effect::Quit;
                continue;
            }

            match tui.input_mode {
                InputMode::Search => match tui.search_box.handle_event(&event) {
                    Some(SearchEvent::Changed(query)) => {
                        debouncer.schedule(Action::Search(query), tx.clone());
                    }
                    Some(SearchEvent::Done) => tui.input_mode = InputMode::Browse,
                    None => {}
                },
                InputMode::Browse => {
                    if let Some(action) = handle_browse_event(&app, &mut tui, &event)
                        && update(&mut app, action) == Effect::Quit
                    {
                        should_quit = true;
                    }
                }
            }
            tui.sync_view(&app);
        }

        if should_quit {
            break;
        }

        // Actions from background tasks (catalog load, debounced search)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    debouncer.cancel();
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::NavigationState;
    use crate::test_support::loaded_app;

    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
        let action = handle_browse_event(app, tui, &event);
        tui.sync_view(app);
        action
    }

    #[test]
    fn test_number_keys_navigate() {
        let app = loaded_app(50);
        let mut tui = TuiState::new();
        for (key, page) in [
            ('1', Page::Home),
            ('2', Page::LiveTv),
            ('3', Page::OnDemand),
            ('4', Page::Discover),
        ] {
            match handle_browse_event(&app, &mut tui, &TuiEvent::InputChar(key)) {
                Some(Action::Navigate(p)) => assert_eq!(p, page),
                other => panic!("expected navigate for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_tab_cycles_from_current_page() {
        let mut app = loaded_app(50);
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::NextTab),
            Some(Action::Navigate(Page::LiveTv))
        ));
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::PrevTab),
            Some(Action::Navigate(Page::Discover))
        ));

        let item = app.catalog().movies()[0].clone();
        update(&mut app, Action::OpenItem(item));
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::NextTab),
            Some(Action::Navigate(Page::Home))
        ));
    }

    #[test]
    fn test_home_enter_opens_selected_card() {
        let mut app = loaded_app(200);
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!((tui.home_row, tui.home_col), (1, 1));

        // Row 1 is Popular in Region: movies 19..=36
        match press(&mut app, &mut tui, TuiEvent::Submit) {
            Some(Action::OpenItem(item)) => assert_eq!(item.id.to_string(), "20"),
            other => panic!("expected OpenItem, got {other:?}"),
        }
    }

    #[test]
    fn test_home_view_all_card() {
        let mut app = loaded_app(200);
        let mut tui = TuiState::new();
        for _ in 0..40 {
            press(&mut app, &mut tui, TuiEvent::CursorRight);
        }
        assert_eq!(tui.home_col, 18);
        assert!(matches!(
            press(&mut app, &mut tui, TuiEvent::Submit),
            Some(Action::ViewAll)
        ));
    }

    #[test]
    fn test_grid_moves_by_rows() {
        let mut app = loaded_app(50);
        update(&mut app, Action::Navigate(Page::Discover));
        let mut tui = TuiState::new();
        tui.sync_view(&app);
        tui.grid_columns = 4;

        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(tui.grid_selected, 5);
        press(&mut app, &mut tui, TuiEvent::CursorUp);
        assert_eq!(tui.grid_selected, 1);

        for _ in 0..20 {
            press(&mut app, &mut tui, TuiEvent::CursorDown);
        }
        assert_eq!(tui.grid_selected, 49);

        match press(&mut app, &mut tui, TuiEvent::Submit) {
            Some(Action::OpenItem(item)) => assert_eq!(item.id.to_string(), "50"),
            other => panic!("expected OpenItem, got {other:?}"),
        }
    }

    #[test]
    fn test_selection_resets_on_page_change() {
        let mut app = loaded_app(50);
        update(&mut app, Action::Navigate(Page::Discover));
        let mut tui = TuiState::new();
        tui.sync_view(&app);
        tui.grid_selected = 7;

        update(&mut app, Action::Navigate(Page::OnDemand));
        tui.sync_view(&app);
        assert_eq!(tui.grid_selected, 0);
    }

    #[test]
    fn test_back_keys_and_escape_on_detail() {
        let mut app = loaded_app(50);
        let mut tui = TuiState::new();
        assert!(handle_browse_event(&app, &mut tui, &TuiEvent::Escape).is_none());
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::Backspace),
            Some(Action::Back)
        ));
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::HistoryForward),
            Some(Action::Forward)
        ));

        let item = app.catalog().movies()[3].clone();
        update(&mut app, Action::OpenItem(item));
        assert!(matches!(app.view, NavigationState::Detail(_)));
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Back)
        ));
    }

    #[test]
    fn test_scroll_only_on_detail() {
        let mut app = loaded_app(50);
        let mut tui = TuiState::new();
        handle_browse_event(&app, &mut tui, &TuiEvent::ScrollDown);
        assert_eq!(tui.detail_scroll, 0);

        let item = app.catalog().movies()[0].clone();
        update(&mut app, Action::OpenItem(item));
        tui.sync_view(&app);
        handle_browse_event(&app, &mut tui, &TuiEvent::ScrollDown);
        assert_eq!(tui.detail_scroll, SCROLL_STEP);
        handle_browse_event(&app, &mut tui, &TuiEvent::ScrollUp);
        assert_eq!(tui.detail_scroll, 0);
    }

    #[test]
    fn test_slash_enters_search_mode() {
        let app = loaded_app(5);
        let mut tui = TuiState::new();
        assert!(handle_browse_event(&app, &mut tui, &TuiEvent::InputChar('/')).is_none());
        assert_eq!(tui.input_mode, InputMode::Search);
    }

    #[test]
    fn test_sign_in_and_quit_keys() {
        let app = loaded_app(5);
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::InputChar('s')),
            Some(Action::SignIn)
        ));
        assert!(matches!(
            handle_browse_event(&app, &mut tui, &TuiEvent::InputChar('q')),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_notice_expires_after_ttl() {
        let start = Instant::now();
        let mut shown = None;
        assert!(!notice_expired(&mut shown, 1, start));
        assert!(!notice_expired(&mut shown, 1, start + Duration::from_millis(1500)));
        assert!(notice_expired(&mut shown, 1, start + NOTICE_TTL));

        // A newer notice restarts the clock
        assert!(!notice_expired(&mut shown, 2, start + NOTICE_TTL));
        assert_eq!(shown.map(|(seq, _)| seq), Some(2));
    }
}
