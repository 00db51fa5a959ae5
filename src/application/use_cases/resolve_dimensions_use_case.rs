//! Fills in missing artist image dimensions.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, info};

use crate::domain::entities::Artist;
use crate::domain::errors::DimensionError;
use crate::domain::ports::ImageDimensionPort;

/// Resolves dimensions of every artist image that lacks them.
pub struct ResolveDimensionsUseCase {
    fetcher: Arc<dyn ImageDimensionPort>,
}

impl ResolveDimensionsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(fetcher: Arc<dyn ImageDimensionPort>) -> Self {
        Self { fetcher }
    }

    /// Fetches missing dimensions concurrently and writes them into `artist`.
    ///
    /// All fetches run to completion before the first failure, if any, is returned.
    /// Images already carrying both dimensions are never requested.
    ///
    /// # Errors
    /// Returns the error of the first failing image in catalog order.
    pub async fn execute(&self, artist: &mut Artist) -> Result<usize, DimensionError> {
        let missing = artist.images_lacking_dimensions();
        if missing.is_empty() {
            debug!(artist_id = %artist.id, "All artist images carry dimensions");
            return Ok(0);
        }

        info!(
            artist_id = %artist.id,
            count = missing.len(),
            "Resolving missing image dimensions"
        );

        let fetches = missing.iter().map(|&index| {
            let url = artist.images[index].url.clone();
            let fetcher = Arc::clone(&self.fetcher);
            async move { fetcher.fetch_dimensions(&url).await }
        });
        let results = join_all(fetches).await;

        for (&index, result) in missing.iter().zip(results) {
            artist.images[index].apply(result?);
        }

        Ok(missing.len())
    }
}
