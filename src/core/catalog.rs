//! # Catalog Store
//!
//! Holds the two session collections: fetched `movies` and the `shows`
//! synthesized from them. The store is built once from a movie list and is
//! read-only afterwards; `shows` can only come from `synthesize_shows`.

use log::{info, warn};

use crate::core::item::{Item, ItemId};

/// Number of leading movies that get a synthesized show.
pub const SHOW_SOURCE_COUNT: usize = 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    movies: Vec<Item>,
    shows: Vec<Item>,
}

impl CatalogStore {
    pub fn new(movies: Vec<Item>) -> Self {
        let shows = synthesize_shows(&movies);
        info!(
            "Catalog ready: {} movies, {} synthesized shows",
            movies.len(),
            shows.len()
        );
        Self { movies, shows }
    }

    pub fn movies(&self) -> &[Item] {
        &self.movies
    }

    pub fn shows(&self) -> &[Item] {
        &self.shows
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Resolves the item id carried by a `#detail/<id>` fragment.
    ///
    /// Movies are matched on their own id. Shows are matched on `tv-<id>`,
    /// so a show's own fragment (`#detail/tv-5`) does not resolve here.
    pub fn find_for_fragment(&self, raw_id: &str) -> Option<&Item> {
        if let Some(movie) = self.movies.iter().find(|m| m.id.matches(raw_id)) {
            return Some(movie);
        }
        let show_id = format!("tv-{raw_id}");
        let found = self.shows.iter().find(|s| s.id.matches(&show_id));
        if found.is_none() {
            warn!("No movie or show for fragment id {raw_id}");
        }
        found
    }

    /// Title search over movies, then shows. Results are concatenated
    /// without de-duplication; an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let needle = query.to_lowercase();
        let matches = |item: &&Item| item.title.to_lowercase().contains(&needle);
        self.movies
            .iter()
            .filter(matches)
            .chain(self.shows.iter().filter(matches))
            .collect()
    }
}

/// Derives fake TV shows from the first `SHOW_SOURCE_COUNT` movies.
pub fn synthesize_shows(movies: &[Item]) -> Vec<Item> {
    movies
        .iter()
        .take(SHOW_SOURCE_COUNT)
        .enumerate()
        .map(|(index, movie)| Item {
            id: ItemId::Text(format!("tv-{}", movie.id)),
            title: format!("TV Show: {} Series", movie.title),
            overview: format!(
                "A binge-worthy series based on {}. {}",
                movie.title, movie.overview
            ),
            poster_path: movie.poster_path.clone(),
            backdrop_path: movie.backdrop_path.clone(),
            release_date: Some(format!("201{}-01-01", index % 5 + 5)),
            casts: movie.casts.clone(),
            adult: movie.adult,
            popularity: movie.popularity * 0.8,
            // +/-1 jitter cycling every 3 shows, capped at 10 but not floored
            vote_average: movie
                .vote_average
                .map(|v| (v + (index % 3) as f64 - 1.0).min(10.0)),
            vote_count: movie.vote_count,
            genres: movie.genres.clone(),
            is_tv_show: true,
        })
        .collect()
}
