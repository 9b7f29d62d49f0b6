//! HTTP source for the paginated movies endpoint:
//! `GET {base}/movies/paginated?page={n}&per_page={m}` returning `{"data": [...]}`.

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use crate::core::config::DEFAULT_BASE_URL;
use crate::core::item::Item;
use crate::source::{CatalogSource, FetchError};

pub struct HttpCatalogSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

/// Pulls the item list out of a page body. A missing or non-list `data`
/// field means the page contributed nothing; malformed entries are skipped.
pub fn page_items(body: Value, page: u32) -> Vec<Item> {
    let data = match body {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    };
    let Some(Value::Array(entries)) = data else {
        debug!("Page {page}: no data list, contributing 0 items");
        return Vec::new();
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<Item>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Page {page}: skipping malformed entry {i}: {e}");
                None
            }
        })
        .collect()
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn name(&self) -> &str {
        "jsonfakery"
    }

    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Item>, FetchError> {
        let url = format!("{}/movies/paginated", self.base_url);
        debug!("GET {url}?page={page}&per_page={per_page}");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Page {page} failed with status {status}");
            return Err(FetchError::Status { page, status });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(format!("page {page}: {e}")))?;

        let items = page_items(body, page);
        debug!("Page {page}: {} items", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_items_reads_data_list() {
        let body = json!({"data": [{"id": 1, "original_title": "A"}, {"id": 2}], "total": 2});
        let items = page_items(body, 1);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn test_page_items_missing_or_wrong_data() {
        assert!(page_items(json!({"items": []}), 1).is_empty());
        assert!(page_items(json!({"data": {"id": 1}}), 1).is_empty());
        assert!(page_items(json!(null), 1).is_empty());
        assert!(page_items(json!([1, 2]), 1).is_empty());
    }

    #[test]
    fn test_page_items_skips_malformed_entries() {
        let body = json!({"data": [{"id": 1}, {"title": "no id"}, {"id": 3}]});
        let ids: Vec<String> = page_items(body, 2).iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_page_items_keeps_entries_with_off_type_scalars() {
        let body = json!({"data": [
            {"id": 42, "vote_count": 12.0},
            {"id": 43, "adult": 0},
            {"id": 44, "popularity": "7.1"},
            {"id": 45}
        ]});
        let items = page_items(body, 1);
        let ids: Vec<String> = items.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["42", "43", "44", "45"]);
        assert_eq!(items[0].vote_count, 12);
        assert!(!items[1].adult);
        assert_eq!(items[2].popularity, 7.1);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = HttpCatalogSource::new(Some("http://localhost:1/".to_string()));
        assert_eq!(source.base_url, "http://localhost:1");
        assert_eq!(source.name(), "jsonfakery");
    }
}
