//! # Page Views
//!
//! What the presentation layer is handed for the current page: the page
//! identity plus the ordered items to show. Built fresh on every frame, so
//! home sections are never cached.

use crate::core::item::Item;
use crate::core::route::NavigationState;
use crate::core::sections::{Section, bucket_home, by_rating};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a> {
    pub heading: String,
    pub subheading: String,
    pub items: Vec<&'a Item>,
    /// Live TV grid: cards get a "TV Series: " prefix.
    pub series: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView<'a> {
    Loading,
    Home(Vec<Section<'a>>),
    Grid(GridView<'a>),
    Detail(&'a Item),
}

impl App {
    pub fn page_view(&self) -> PageView<'_> {
        if self.is_loading {
            return PageView::Loading;
        }
        let catalog = self.catalog();
        match &self.view {
            NavigationState::Home => PageView::Home(bucket_home(catalog.movies()).sections),
            NavigationState::Discover => match &self.search {
                Some(search) => PageView::Grid(GridView {
                    heading: "Search Results >".to_string(),
                    subheading: format!(
                        "Found {} results for \"{}\"",
                        search.items.len(),
                        search.query
                    ),
                    items: search.items.iter().collect(),
                    series: false,
                }),
                None => PageView::Grid(GridView {
                    heading: "Discover All Movies >".to_string(),
                    subheading: "Explore our entire collection".to_string(),
                    items: catalog.movies().iter().collect(),
                    series: false,
                }),
            },
            NavigationState::LiveTv => PageView::Grid(GridView {
                heading: "Live TV >".to_string(),
                subheading: "Series streaming now".to_string(),
                items: catalog.shows().iter().collect(),
                series: true,
            }),
            NavigationState::OnDemand => PageView::Grid(GridView {
                heading: "On Demand >".to_string(),
                subheading: "Highest rated first".to_string(),
                items: by_rating(catalog.movies()),
                series: false,
            }),
            NavigationState::Detail(item) => PageView::Detail(item),
        }
    }
}
