//! Product-pages catalog client
//!
//! Talks to the catalog's REST API and maps its release records into
//! [`Release`] values. Only the two fields the release model needs are
//! requested from the server.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::error::CatalogError;
use crate::catalog::source::Catalog;
use crate::config::FETCH_TIMEOUT;
use crate::release::{Release, Releases};

/// Fields requested from the catalog for each release record.
const RELEASE_FIELDS: &str = "shortname,phase_display";

/// One release record in the catalog response.
///
/// The server omits empty fields, so both default to `""`.
#[derive(Debug, Deserialize)]
struct ReleaseRecord {
    #[serde(default)]
    shortname: String,
    #[serde(default)]
    phase_display: String,
}

/// Catalog client for the product-pages REST API.
pub struct ProductPagesClient {
    client: Client,
    base_url: String,
}

impl ProductPagesClient {
    /// Creates a new client for the given API base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("pplatest/", env!("CARGO_PKG_VERSION")))
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Catalog for ProductPagesClient {
    async fn fetch_releases(&self, product: &str) -> Result<Releases, CatalogError> {
        let url = format!("{}/releases", self.base_url);
        debug!("Fetching releases: {} product={}", url, product);

        let response = self
            .client
            .get(&url)
            .query(&[("product__shortname", product), ("fields", RELEASE_FIELDS)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("catalog returned status {}: {}", status, url);
            return Err(CatalogError::Status(status));
        }

        let records: Vec<ReleaseRecord> = response.json().await.map_err(|e| {
            warn!("Failed to parse catalog response: {}", e);
            CatalogError::InvalidResponse(e.to_string())
        })?;

        Ok(records
            .into_iter()
            .map(|record| Release::new(record.shortname, record.phase_display))
            .collect())
    }
}
