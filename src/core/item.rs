//! # Catalog Items
//!
//! One `Item` type covers both fetched movies and synthesized shows.
//! Field names follow the upstream JSON (`original_title`, `casts`, ...) so
//! records deserialize straight off the wire.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Item identifier. Upstream ids are usually integers, synthesized shows use
/// strings like `tv-42`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// Loose comparison against a raw fragment segment.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ItemId::Number(n) => raw.parse::<i64>().is_ok_and(|r| r == *n),
            ItemId::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CastMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Genre tags as the API sends them: usually a list of names, sometimes a
/// single string. Anything else is kept but never matches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GenreTags {
    Names(Vec<String>),
    Text(String),
    Other(serde_json::Value),
}

impl GenreTags {
    pub fn contains(&self, tag: &str) -> bool {
        match self {
            GenreTags::Names(names) => names.iter().any(|n| n == tag),
            GenreTags::Text(text) => text.contains(tag),
            GenreTags::Other(_) => false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "original_title", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub casts: Vec<CastMember>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub adult: bool,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub vote_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<GenreTags>,
    #[serde(rename = "isTvShow", default, deserialize_with = "null_as_default")]
    pub is_tv_show: bool,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Scalar fields the UI never depends on. An off-type value falls back to the
// default instead of dropping the whole record.

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or_default(),
        _ => 0.0,
    })
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let as_count = |n: f64| if n.is_finite() && n >= 0.0 { n as u64 } else { 0 };
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or_else(|| n.as_f64().map(as_count).unwrap_or_default()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(as_count))
                .unwrap_or_default()
        }
        _ => 0,
    })
}

impl Item {
    /// Vote average used for ordering; missing or NaN counts as zero.
    pub fn rating(&self) -> f64 {
        self.vote_average.filter(|v| !v.is_nan()).unwrap_or(0.0)
    }

    pub fn has_genre(&self, tag: &str) -> bool {
        self.genres.as_ref().is_some_and(|g| g.contains(tag))
    }

    /// Case-insensitive keyword match against the overview.
    pub fn overview_mentions(&self, keyword: &str) -> bool {
        self.overview.to_lowercase().contains(keyword)
    }

    /// Release year, if the date parses.
    pub fn release_year(&self) -> Option<i32> {
        let raw = self.release_date.as_deref()?.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.year());
        }
        DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.year())
    }

    /// Year label for cards: `2019` or `N/A`.
    pub fn year_label(&self) -> String {
        self.release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
