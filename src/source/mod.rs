pub mod http;
pub mod loader;
pub mod provider;

pub use http::HttpCatalogSource;
pub use loader::load_catalog;
pub use provider::{CatalogSource, FetchError};
