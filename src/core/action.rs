//! # Actions
//!
//! Everything that can happen in Marquee becomes an `Action`.
//! User presses `2`? That's `Action::Navigate(Page::LiveTv)`.
//! The catalog fetch finishes? That's `Action::CatalogLoaded(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect` for the
//! event loop. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{info, warn};

use crate::core::catalog::CatalogStore;
use crate::core::item::Item;
use crate::core::route::{NavigationState, Page, decode, resolve};
use crate::core::state::{App, NoticeKind, SearchResults};
use crate::source::FetchError;

#[derive(Debug)]
pub enum Action {
    /// Result of the batched catalog fetch.
    CatalogLoaded(Result<CatalogStore, FetchError>),
    /// Nav bar tab.
    Navigate(Page),
    /// "View All" card at the end of a home row.
    ViewAll,
    /// A card was opened.
    OpenItem(Item),
    /// Debounced search query.
    Search(String),
    Back,
    Forward,
    SignIn,
    DismissNotice,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CatalogLoaded(Ok(catalog)) => {
            app.catalog = catalog;
            app.is_loading = false;
            app.error = None;
            let fragment = app.history.current().to_string();
            rederive(app, &fragment);
        }
        Action::CatalogLoaded(Err(e)) => {
            warn!("Catalog load failed: {e}");
            app.is_loading = false;
            let message = match e {
                FetchError::Empty => "No movie data found. Oops!",
                _ => "Couldn't load content. Give it another try later!",
            };
            app.notify(NoticeKind::Error, message);
            app.error = Some(e.to_string());
        }
        Action::Navigate(page) => match NavigationState::from_page(page) {
            Some(state) => {
                app.notify(NoticeKind::Info, nav_message(page));
                show(app, state);
            }
            None => warn!("Ignoring navigation to {} without an item", page.id()),
        },
        Action::ViewAll => show(app, NavigationState::Discover),
        Action::OpenItem(item) => show(app, NavigationState::Detail(item)),
        Action::Search(query) => run_search(app, &query),
        Action::Back => {
            if let Some(fragment) = app.history.back().map(str::to_string) {
                rederive(app, &fragment);
            }
        }
        Action::Forward => {
            if let Some(fragment) = app.history.forward().map(str::to_string) {
                rederive(app, &fragment);
            }
        }
        Action::SignIn => app.notify(NoticeKind::Info, "Sign In is not set up in this demo yet."),
        Action::DismissNotice => app.notice = None,
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

fn nav_message(page: Page) -> &'static str {
    match page {
        Page::Home => "Heading back home...",
        Page::LiveTv => "Checking out Live TV...",
        Page::OnDemand => "Browsing On Demand content...",
        Page::Discover => "Discovering new stuff...",
        Page::Detail => "",
    }
}

/// Explicit navigation: push a history entry and switch pages.
fn show(app: &mut App, state: NavigationState) {
    app.history.push(state.fragment());
    app.view = state;
    app.search = None;
}

/// History navigation: re-derive the page from a fragment without pushing.
fn rederive(app: &mut App, fragment: &str) {
    app.view = resolve(&decode(fragment), &app.catalog);
    app.search = None;
}

fn run_search(app: &mut App, query: &str) {
    let term = query.to_lowercase();
    let items: Vec<Item> = app.catalog.search(&term).into_iter().cloned().collect();
    info!("Search '{}': {} results", term, items.len());

    if items.is_empty() {
        app.notify(
            NoticeKind::Info,
            format!("No results found for \"{term}\". Bummer!"),
        );
        show(app, NavigationState::Home);
        return;
    }

    show(app, NavigationState::Discover);
    app.search = Some(SearchResults { query: term, items });
}
