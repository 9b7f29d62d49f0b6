//! Batched catalog load: every page is requested at once and the batch is
//! awaited as a whole. One failed page fails the load.

use futures::future::join_all;
use log::{info, warn};

use crate::core::catalog::CatalogStore;
use crate::source::{CatalogSource, FetchError};

pub async fn load_catalog(
    source: &dyn CatalogSource,
    pages: u32,
    per_page: u32,
) -> Result<CatalogStore, FetchError> {
    info!(
        "Loading catalog from {}: {} pages x {} items",
        source.name(),
        pages,
        per_page
    );

    let requests = (1..=pages).map(|page| source.fetch_page(page, per_page));
    let responses = join_all(requests).await;

    let mut movies = Vec::new();
    for result in responses {
        movies.extend(result?);
    }

    if movies.is_empty() {
        warn!("Catalog load returned no movies");
        return Err(FetchError::Empty);
    }

    info!("Catalog load complete: {} movies", movies.len());
    Ok(CatalogStore::new(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Item;
    use crate::test_support::movie;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves `sizes[page - 1]` movies per page, numbering ids globally.
    struct FakeSource {
        sizes: Vec<usize>,
        fail_page: Option<u32>,
        requested: Mutex<Vec<u32>>,
    }

    impl FakeSource {
        fn new(sizes: Vec<usize>) -> Self {
            Self {
                sizes,
                fail_page: None,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        fn name(&self) -> &str {
            "fake"
        }

        async fn fetch_page(&self, page: u32, _per_page: u32) -> Result<Vec<Item>, FetchError> {
            self.requested.lock().unwrap().push(page);
            if self.fail_page == Some(page) {
                return Err(FetchError::Status { page, status: 500 });
            }
            let before: usize = self.sizes[..(page as usize - 1)].iter().sum();
            let count = self.sizes[page as usize - 1];
            Ok((0..count)
                .map(|i| {
                    let id = (before + i + 1) as i64;
                    movie(id, &format!("Page {page} #{i}"))
                })
                .collect())
        }
    }

    #[test]
    fn test_concatenates_in_page_order() {
        let source = FakeSource::new(vec![3, 0, 2, 4]);
        let catalog = tokio_test::block_on(load_catalog(&source, 4, 10)).unwrap();
        let ids: Vec<String> = catalog.movies().iter().map(|m| m.id.to_string()).collect();
        assert_eq!(ids, (1..=9).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(catalog.shows().len(), 9);
        assert_eq!(source.requested.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_one_failed_page_fails_everything() {
        let mut source = FakeSource::new(vec![10; 20]);
        source.fail_page = Some(13);
        let result = tokio_test::block_on(load_catalog(&source, 20, 10));
        assert!(matches!(result, Err(FetchError::Status { page: 13, status: 500 })));
        // Every request was still issued.
        assert_eq!(source.requested.lock().unwrap().len(), 20);
    }

    #[test]
    fn test_all_empty_pages_is_empty_error() {
        let source = FakeSource::new(vec![0; 5]);
        let result = tokio_test::block_on(load_catalog(&source, 5, 10));
        assert!(matches!(result, Err(FetchError::Empty)));
    }

    #[test]
    fn test_full_batch_shape() {
        let source = FakeSource::new(vec![10; 20]);
        let catalog = tokio_test::block_on(load_catalog(&source, 20, 10)).unwrap();
        assert_eq!(catalog.movies().len(), 200);
        assert_eq!(catalog.shows().len(), 20);
    }
}
