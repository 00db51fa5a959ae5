//! Catalog source port definition.

use async_trait::async_trait;

use crate::domain::entities::{Album, Artist, ArtistSource};
use crate::domain::errors::CatalogError;

/// Port for reading artist and album metadata.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Lists every artist the catalog knows about.
    async fn artist_sources(&self) -> Result<Vec<ArtistSource>, CatalogError>;

    /// Fetches details of one artist.
    async fn artist_details(&self, artist_id: &str) -> Result<Artist, CatalogError>;

    /// Fetches all albums of one artist.
    async fn albums(&self, artist_id: &str) -> Result<Vec<Album>, CatalogError>;
}
