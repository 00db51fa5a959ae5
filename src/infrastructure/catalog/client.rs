//! HTTP client for the AlbumShuffler JSON catalog.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::entities::{AccessToken, Album, Artist, ArtistSource};
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogPort;

/// Default location of the published catalog.
pub const DEFAULT_CATALOG_BASE: &str =
    "https://raw.githubusercontent.com/AlbumShuffler/Albums/main";

/// Catalog client reading the artist index, artist details and album lists.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    token: Option<AccessToken>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Creates client for `base_url`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        token: Option<AccessToken>,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| CatalogError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url, token))
    }

    /// Creates client reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        token: Option<AccessToken>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(url = %url, "Fetching catalog document");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, token.authorization_value());
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to reach catalog");
            if e.is_timeout() {
                CatalogError::network(&url, "request timed out")
            } else if e.is_connect() {
                CatalogError::network(&url, "failed to connect")
            } else {
                CatalogError::network(&url, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::network(&url, format!("failed to read body: {e}")))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Failed to parse catalog document");
            CatalogError::decode(&url, e.to_string())
        })
    }
}

#[async_trait]
impl CatalogPort for CatalogClient {
    async fn artist_sources(&self) -> Result<Vec<ArtistSource>, CatalogError> {
        self.get_json("input/source.json").await
    }

    async fn artist_details(&self, artist_id: &str) -> Result<Artist, CatalogError> {
        self.get_json(&format!("output/{artist_id}/artist")).await
    }

    async fn albums(&self, artist_id: &str) -> Result<Vec<Album>, CatalogError> {
        self.get_json(&format!("output/{artist_id}/albums")).await
    }
}
