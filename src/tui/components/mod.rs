//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `NavBar`: Top line with page tabs and Sign In
//! - `Card` / `ViewAllCard`: A single poster card
//! - `Shelf`: One home section (title plus a row of cards)
//! - `NoticeToast`: Transient message overlay
//! - `LoadingIndicator`: Spinner while the catalog loads
//!
//! ### Stateful Components
//!
//! Components that keep local state or write presentation state back:
//! - `SearchBox`: Text field emitting `SearchEvent`s
//! - `Grid`: Card grid that records its column count
//! - `DetailPage`: Scrollable detail view that clamps its offset
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props rather than reading `App`
//! directly, so every one of them can be rendered against a `TestBackend`
//! with hand-built data.
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! NavBar::new(app.view.page()).render(frame, nav_area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── nav_bar.rs     (Page tabs)
//! ├── search_box.rs  (Search input)
//! ├── card.rs        (Poster card, View All card)
//! ├── shelf.rs       (Home section row)
//! ├── grid.rs        (Full-page card grid)
//! ├── detail.rs      (Detail page)
//! ├── notice.rs      (Toast overlay)
//! └── loading.rs     (Spinner)
//! ```

pub mod card;
pub mod detail;
pub mod grid;
pub mod loading;
pub mod nav_bar;
pub mod notice;
pub mod search_box;
pub mod shelf;

pub use card::{Card, ViewAllCard};
pub use detail::DetailPage;
pub use grid::Grid;
pub use loading::LoadingIndicator;
pub use nav_bar::NavBar;
pub use notice::NoticeToast;
pub use search_box::{SearchBox, SearchEvent};
pub use shelf::Shelf;
