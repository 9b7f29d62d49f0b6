use std::fmt;

use async_trait::async_trait;

use crate::core::item::Item;

/// Errors that can occur while loading the catalog.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, body read).
    Network(String),
    /// A page came back with a non-success status.
    Status { page: u32, status: u16 },
    /// A response body was not valid JSON.
    Parse(String),
    /// Every page succeeded but none carried any items.
    Empty,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { page, status } => {
                write!(f, "HTTP error on page {page}: status {status}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::Empty => write!(f, "no movie data returned"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A paginated movie source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Fetches one page of movies. Pages are 1-based.
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Item>, FetchError>;
}
