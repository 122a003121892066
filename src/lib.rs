//! Catalog-backed release lifecycle lookup
//!
//! Fetches a product's releases from a product-pages style catalog,
//! models their lifecycle phases, and answers which release version is
//! the latest under a z-stream inclusion policy.

pub mod catalog;
pub mod config;
pub mod release;
