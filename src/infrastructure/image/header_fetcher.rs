//! HTTP adapter resolving image dimensions from a partial download.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace, warn};

use crate::domain::entities::ImageDescriptor;
use crate::domain::errors::DimensionError;
use crate::domain::ports::ImageDimensionPort;

use super::header::parse_dimensions;
use super::prefix_reader::{ChunkSource, Termination, read_prefix};

/// Bytes read before the connection is dropped and the header parsed.
pub const DEFAULT_HEADER_THRESHOLD: usize = 5000;

/// Configuration for the header fetcher.
#[derive(Debug, Clone)]
pub struct HeaderFetchConfig {
    /// Body prefix length after which the download is abandoned.
    pub header_threshold: usize,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
    /// User agent sent with image requests.
    pub user_agent: String,
}

impl Default for HeaderFetchConfig {
    fn default() -> Self {
        Self {
            header_threshold: DEFAULT_HEADER_THRESHOLD,
            timeout_secs: None,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

/// Resolves image dimensions by streaming only the leading bytes of each image.
#[derive(Debug, Clone)]
pub struct HttpHeaderFetcher {
    client: Client,
    header_threshold: usize,
}

impl HttpHeaderFetcher {
    /// Creates fetcher with its own HTTP client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &HeaderFetchConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::with_client(builder.build()?, config.header_threshold))
    }

    /// Creates fetcher reusing an existing client.
    #[must_use]
    pub const fn with_client(client: Client, header_threshold: usize) -> Self {
        Self {
            client,
            header_threshold,
        }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn header_threshold(&self) -> usize {
        self.header_threshold
    }
}

#[async_trait]
impl ImageDimensionPort for HttpHeaderFetcher {
    async fn fetch_dimensions(&self, url: &str) -> Result<ImageDescriptor, DimensionError> {
        trace!(url = %url, "Requesting image header");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DimensionError::download(url, "request timed out")
            } else if e.is_connect() {
                DimensionError::download(url, format!("failed to connect: {e}"))
            } else {
                DimensionError::download(url, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DimensionError::download(url, format!("HTTP {status}")));
        }

        let mut body = response;
        let result = dimensions_from_body(url, &mut body, self.header_threshold).await;

        // Dropping a partially read response closes its connection.
        drop(body);
        result
    }
}

/// Reads up to `threshold` bytes from `body` and parses the image header from them.
///
/// # Errors
/// Returns `DimensionError::Download` if reading the body fails and
/// `DimensionError::HeaderParse` if the received bytes hold no usable header.
pub async fn dimensions_from_body<S>(
    url: &str,
    body: &mut S,
    threshold: usize,
) -> Result<ImageDescriptor, DimensionError>
where
    S: ChunkSource + ?Sized,
{
    let prefix = read_prefix(body, threshold).await.map_err(|e| {
        warn!(url = %url, error = %e, "Image body ended abnormally");
        DimensionError::download(url, format!("failed to read body: {e}"))
    })?;

    match prefix.termination {
        Termination::ThresholdReached => {
            debug!(url = %url, bytes = prefix.bytes.len(), "Header threshold reached, abandoning download");
        }
        Termination::EndOfStream => {
            debug!(url = %url, bytes = prefix.bytes.len(), "Image body read in full");
        }
    }

    parse_dimensions(url, &prefix.bytes)
}
