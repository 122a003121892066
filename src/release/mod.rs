//! Release model and version ordering
//!
//! This module is the core of the crate: it models one catalog release
//! (identifier plus lifecycle phase) and defines the version order used
//! to pick the latest one.
//!
//! # Modules
//!
//! - [`types`]: `Release` and the `Releases` collection with
//!   latest-version selection
//! - [`ordering`]: comparable key over dotted release version strings

pub mod ordering;
pub mod types;

pub use ordering::{Patch, VersionKey};
pub use types::{Release, Releases};
