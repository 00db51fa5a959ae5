//! Catalog source adapter.

pub mod client;

pub use client::{CatalogClient, DEFAULT_CATALOG_BASE};
