//! Catalog access layer
//!
//! # Modules
//!
//! - [`source`]: `Catalog` trait, the seam between the release model and
//!   the network
//! - [`product_pages`]: reqwest-based client for the product-pages API
//! - [`error`]: error types for catalog operations

pub mod error;
pub mod product_pages;
pub mod source;

pub use error::CatalogError;
pub use product_pages::ProductPagesClient;
pub use source::Catalog;
