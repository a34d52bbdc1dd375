//! Source trait for fetching a bucket listing

#[cfg(test)]
use mockall::automock;

use crate::listing::error::ListingError;

/// Trait for fetching the raw object listing of a bucket
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetches the listing of all objects whose key starts with `prefix`
    ///
    /// # Returns
    /// * `Ok(String)` - The raw listing document
    /// * `Err(ListingError)` - If the request fails or returns a non-success status
    async fn fetch_listing(&self, prefix: &str) -> Result<String, ListingError>;
}
