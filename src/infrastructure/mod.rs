//! Infrastructure layer with external service adapters.

/// Catalog source client.
pub mod catalog;
/// Application configuration.
pub mod config;
/// Image header fetching.
pub mod image;
/// Generated module output.
pub mod output;

#[cfg(test)]
pub(crate) mod test_http;

pub use catalog::{CatalogClient, DEFAULT_CATALOG_BASE};
pub use config::{AppConfig, CliArgs, ConfigError, ConfigStore, LogLevel};
pub use image::{HeaderFetchConfig, HttpHeaderFetcher};
pub use output::ElmModuleWriter;
