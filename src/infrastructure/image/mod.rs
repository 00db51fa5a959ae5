//! Image dimension infrastructure.
//!
//! This module provides:
//! - Bounded prefix reading of HTTP response bodies
//! - Header sniffing of the received bytes
//! - The HTTP adapter for `ImageDimensionPort`

pub mod header;
pub mod header_fetcher;
pub mod prefix_reader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use header::parse_dimensions;
pub use header_fetcher::{
    DEFAULT_HEADER_THRESHOLD, HeaderFetchConfig, HttpHeaderFetcher, dimensions_from_body,
};
pub use prefix_reader::{BodyPrefix, ByteAccumulator, ChunkSource, Termination, read_prefix};
