//! Remote Gateway
//!
//! Network operations on the backend `beer` resource. Implementations do not
//! touch local state; callers apply the returned beers to the catalog.

mod http;
mod timeout;

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Beer;

pub use http::HttpGateway;
pub use timeout::with_deadline;

#[async_trait(?Send)]
pub trait BeerGateway {
    /// GET the full collection
    async fn list_all(&self) -> CatalogResult<Vec<Beer>>;

    /// PATCH the description; returns the backend's updated beer
    async fn update_description(&self, id: u32, text: &str) -> CatalogResult<Beer>;

    /// PATCH the whole review list; returns the backend's updated beer
    async fn update_reviews(&self, id: u32, reviews: &[String]) -> CatalogResult<Beer>;
}
