//! # Section Bucketing
//!
//! Slices the movie list into the ten home-page rows. Rows either take the
//! next sequential slice (advancing a shared cursor), sort the whole list by
//! rating, or filter by genre/keyword and fall back to the next slice when
//! nothing matches.
//!
//! Sections borrow from the catalog and are rebuilt on every render.

use crate::core::item::Item;
use std::cmp::Ordering;

/// Maximum items in one home row.
pub const SECTION_LIMIT: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    BingeShows,
    PopularInRegion,
    TrendingNow,
    NewReleases,
    CriticallyAcclaimed,
    ActionAdventure,
    Comedies,
    Documentaries,
    SciFiFantasy,
    FamilyFavorites,
}

impl SectionKind {
    /// Home rows in display order.
    pub const ALL: [SectionKind; 10] = [
        SectionKind::BingeShows,
        SectionKind::PopularInRegion,
        SectionKind::TrendingNow,
        SectionKind::NewReleases,
        SectionKind::CriticallyAcclaimed,
        SectionKind::ActionAdventure,
        SectionKind::Comedies,
        SectionKind::Documentaries,
        SectionKind::SciFiFantasy,
        SectionKind::FamilyFavorites,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::BingeShows => "Binge Shows",
            SectionKind::PopularInRegion => "Popular in Region",
            SectionKind::TrendingNow => "Trending Now",
            SectionKind::NewReleases => "New Releases",
            SectionKind::CriticallyAcclaimed => "Critically Acclaimed",
            SectionKind::ActionAdventure => "Action & Adventure",
            SectionKind::Comedies => "Comedies",
            SectionKind::Documentaries => "Documentaries",
            SectionKind::SciFiFantasy => "Sci-Fi & Fantasy",
            SectionKind::FamilyFavorites => "Family Favorites",
        }
    }

    /// Genre tag and overview keywords for the filtered rows.
    fn filter(self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            SectionKind::ActionAdventure => Some(("Action", &["action"])),
            SectionKind::Comedies => Some(("Comedy", &["comedy"])),
            SectionKind::Documentaries => Some(("Documentary", &["documentary"])),
            SectionKind::SciFiFantasy => Some(("Science Fiction", &["sci-fi", "fantasy"])),
            SectionKind::FamilyFavorites => Some(("Family", &["family"])),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub items: Vec<&'a Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeSections<'a> {
    pub sections: Vec<Section<'a>>,
    /// Index of the first movie not handed out by a sequential row.
    pub cursor: usize,
}

/// Takes the next `SECTION_LIMIT` items from `cursor` and advances it.
pub fn next_slice<'a>(movies: &'a [Item], cursor: &mut usize) -> Vec<&'a Item> {
    let start = (*cursor).min(movies.len());
    let end = (start + SECTION_LIMIT).min(movies.len());
    *cursor += SECTION_LIMIT;
    movies[start..end].iter().collect()
}

/// Stable sort by vote average, highest first. Missing votes count as 0 and
/// tie with an explicit 0 or -0.
pub fn by_rating(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| {
        b.rating()
            .partial_cmp(&a.rating())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

fn matches_filter(item: &Item, genre: &str, keywords: &[&str]) -> bool {
    item.has_genre(genre) || keywords.iter().any(|k| item.overview_mentions(k))
}

/// Builds one row, advancing `cursor` only for sequential rows and for
/// filtered rows that had to fall back.
pub fn build_section<'a>(kind: SectionKind, movies: &'a [Item], cursor: &mut usize) -> Section<'a> {
    let items = if let Some((genre, keywords)) = kind.filter() {
        let hits: Vec<&Item> = movies
            .iter()
            .filter(|m| matches_filter(m, genre, keywords))
            .take(SECTION_LIMIT)
            .collect();
        if hits.is_empty() {
            next_slice(movies, cursor)
        } else {
            hits
        }
    } else if kind == SectionKind::CriticallyAcclaimed {
        let mut top = by_rating(movies);
        top.truncate(SECTION_LIMIT);
        top
    } else {
        next_slice(movies, cursor)
    };
    Section { kind, items }
}

/// Runs the full home pass over the movie list.
pub fn bucket_home(movies: &[Item]) -> HomeSections<'_> {
    let mut cursor = 0;
    let sections = SectionKind::ALL
        .iter()
        .map(|&kind| build_section(kind, movies, &mut cursor))
        .collect();
    HomeSections { sections, cursor }
}
