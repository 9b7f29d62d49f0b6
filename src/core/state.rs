//! # Application State
//!
//! Core browsing state for Marquee. Domain data only; cursor positions,
//! scroll offsets and other presentation state live in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: CatalogStore         // movies + synthesized shows (core-only writer)
//! ├── history: History              // fragment history with cursor
//! ├── view: NavigationState         // resolved current page
//! ├── search: Option<SearchResults> // results shown on the discover page
//! ├── notice: Option<Notice>        // transient toast
//! ├── is_loading: bool              // initial fetch in flight
//! └── error: Option<String>         // load failure banner
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::CatalogStore;
use crate::core::item::Item;
use crate::core::route::{History, NavigationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A short-lived message. `seq` increases with every notice so the UI can
/// tell a repeated message apart from one it has already timed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub items: Vec<Item>,
}

pub struct App {
    /// Written only by `update` when a load result arrives.
    pub(in crate::core) catalog: CatalogStore,
    pub history: History,
    pub view: NavigationState,
    pub search: Option<SearchResults>,
    pub notice: Option<Notice>,
    pub is_loading: bool,
    pub error: Option<String>,
    notice_seq: u64,
}

impl App {
    /// New session sitting on `start_fragment`, waiting for the catalog.
    pub fn new(start_fragment: &str) -> Self {
        Self {
            catalog: CatalogStore::default(),
            history: History::new(start_fragment),
            view: NavigationState::Home,
            search: None,
            notice: None,
            is_loading: true,
            error: None,
            notice_seq: 0,
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            seq: self.notice_seq,
            kind,
            message: message.into(),
        });
    }
}
