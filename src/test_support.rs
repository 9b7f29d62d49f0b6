//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::CatalogStore;
use crate::core::item::{Item, ItemId};
use crate::core::state::App;

/// A bare movie with a neutral overview (no genre keywords).
pub fn movie(id: i64, title: &str) -> Item {
    Item {
        id: ItemId::Number(id),
        title: title.to_string(),
        overview: format!("Overview for movie {id}."),
        poster_path: Some(format!("https://img.example/{id}.jpg")),
        backdrop_path: None,
        release_date: Some("2001-05-04".to_string()),
        casts: vec![],
        adult: false,
        popularity: 10.0,
        vote_average: None,
        vote_count: 3,
        genres: None,
        is_tv_show: false,
    }
}

pub fn rated(id: i64, title: &str, vote: f64) -> Item {
    Item {
        vote_average: Some(vote),
        ..movie(id, title)
    }
}

/// Movies with sequential ids `1..=count`.
pub fn movies_of(count: i64) -> Vec<Item> {
    (1..=count).map(|i| movie(i, &format!("Movie {i}"))).collect()
}

pub fn catalog_of(count: i64) -> CatalogStore {
    CatalogStore::new(movies_of(count))
}

/// An app that has already loaded `count` movies and sits on `#home`.
pub fn loaded_app(count: i64) -> App {
    let mut app = App::new("#home");
    crate::core::action::update(
        &mut app,
        crate::core::action::Action::CatalogLoaded(Ok(catalog_of(count))),
    );
    app
}
