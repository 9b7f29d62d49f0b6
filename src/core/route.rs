//! # Routing
//!
//! Fragment grammar: `#<page>` or `#detail/<itemId>`.
//!
//! ```text
//!  fragment ──decode──▶ Route ──resolve(catalog)──▶ NavigationState
//!     ▲                                                   │
//!     └──────────────────── fragment() ◀──────────────────┘
//! ```
//!
//! Explicit navigation pushes the new fragment onto `History`; back and
//! forward move through it and re-derive the state without pushing.

use log::{debug, warn};

use crate::core::catalog::CatalogStore;
use crate::core::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Discover,
    LiveTv,
    OnDemand,
    Detail,
}

impl Page {
    /// Navigation tabs in display order.
    pub const TABS: [Page; 4] = [Page::Home, Page::LiveTv, Page::OnDemand, Page::Discover];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Discover => "discover",
            Page::LiveTv => "live-tv",
            Page::OnDemand => "on-demand",
            Page::Detail => "detail",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        match id {
            "home" => Some(Page::Home),
            "discover" => Some(Page::Discover),
            "live-tv" => Some(Page::LiveTv),
            "on-demand" => Some(Page::OnDemand),
            "detail" => Some(Page::Detail),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Discover => "Discover",
            Page::LiveTv => "Live TV",
            Page::OnDemand => "On Demand",
            Page::Detail => "Details",
        }
    }
}

/// Resolved navigation target. Only `Detail` carries an item.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationState {
    Home,
    Discover,
    LiveTv,
    OnDemand,
    Detail(Item),
}

impl NavigationState {
    /// State for a plain page; `None` for `Page::Detail`, which needs an item.
    pub fn from_page(page: Page) -> Option<Self> {
        match page {
            Page::Home => Some(NavigationState::Home),
            Page::Discover => Some(NavigationState::Discover),
            Page::LiveTv => Some(NavigationState::LiveTv),
            Page::OnDemand => Some(NavigationState::OnDemand),
            Page::Detail => None,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            NavigationState::Home => Page::Home,
            NavigationState::Discover => Page::Discover,
            NavigationState::LiveTv => Page::LiveTv,
            NavigationState::OnDemand => Page::OnDemand,
            NavigationState::Detail(_) => Page::Detail,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        match self {
            NavigationState::Detail(item) => Some(item),
            _ => None,
        }
    }

    pub fn fragment(&self) -> String {
        match self {
            NavigationState::Detail(item) => format!("#detail/{}", item.id),
            other => format!("#{}", other.page().id()),
        }
    }

    /// The detail page scrolls; every other page is a fixed viewport.
    pub fn allows_scroll(&self) -> bool {
        matches!(self, NavigationState::Detail(_))
    }
}

/// A decoded fragment, before it is checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub item_id: Option<String>,
}

/// Splits a fragment into page and item id. Empty means home; unknown
/// pages also land on home.
pub fn decode(fragment: &str) -> Route {
    let trimmed = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut parts = trimmed.split('/');
    let page_id = parts.next().unwrap_or_default();
    let item_id = parts.next().map(str::to_string);

    let page = if page_id.is_empty() {
        Page::Home
    } else {
        Page::from_id(page_id).unwrap_or_else(|| {
            warn!("Unknown page '{page_id}' in fragment '{fragment}', showing home");
            Page::Home
        })
    };

    Route { page, item_id }
}

/// Turns a route into a state. A detail route whose id cannot be found
/// falls back to home.
pub fn resolve(route: &Route, catalog: &CatalogStore) -> NavigationState {
    if route.page != Page::Detail {
        return NavigationState::from_page(route.page).unwrap_or(NavigationState::Home);
    }
    match route.item_id.as_deref() {
        Some(raw) => match catalog.find_for_fragment(raw) {
            Some(item) => NavigationState::Detail(item.clone()),
            None => {
                warn!("Couldn't find data for ID {raw}. Going back to home.");
                NavigationState::Home
            }
        },
        None => {
            warn!("Detail fragment without an item id, showing home");
            NavigationState::Home
        }
    }
}

/// Fragment history with a cursor, in the style of a browser session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Adds an entry after the cursor, dropping anything forward of it.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment.into());
        self.index = self.entries.len() - 1;
        debug!("History push: {} (depth {})", self.current(), self.entries.len());
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        debug!("History back: {}", self.current());
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        debug!("History forward: {}", self.current());
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
