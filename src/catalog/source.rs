//! Catalog trait for fetching product releases

#[cfg(test)]
use mockall::automock;

use crate::catalog::error::CatalogError;
use crate::release::Releases;

/// Trait for fetching a product's releases from a catalog service
///
/// Failures are opaque to the release model: the fetch is not retried
/// and the error carries only a human-readable cause.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches all releases for a product
    ///
    /// # Arguments
    /// * `product` - Product family shortname (e.g., "openshift")
    ///
    /// # Returns
    /// * `Ok(Releases)` - releases in catalog response order
    /// * `Err(CatalogError)` - if the fetch fails
    async fn fetch_releases(&self, product: &str) -> Result<Releases, CatalogError>;
}
