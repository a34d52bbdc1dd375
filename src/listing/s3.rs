//! S3 bucket listing client

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::{S3_BASE_URL, normalize_base_url};
use crate::listing::error::ListingError;
use crate::listing::source::ListingSource;

/// Listing client for a public, unauthenticated S3 bucket
pub struct S3Listing {
    client: Client,
    base_url: String,
}

impl Default for S3Listing {
    fn default() -> Self {
        Self::new(S3_BASE_URL)
    }
}

impl S3Listing {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl ListingSource for S3Listing {
    async fn fetch_listing(&self, prefix: &str) -> Result<String, ListingError> {
        let url = format!("{}?prefix={}", self.base_url, prefix);
        debug!("Fetching bucket listing: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bucket listing returned status {}: {}", status, url);
            return Err(ListingError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await?;
        debug!("Received {} bytes of listing", body.len());

        Ok(body)
    }
}
