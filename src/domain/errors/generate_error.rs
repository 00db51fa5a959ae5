//! Module generation error types.

use std::path::PathBuf;

use thiserror::Error;

use super::{CatalogError, DimensionError};

/// Errors raised while turning catalog data into Elm modules.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum GenerateError {
    #[error("duplicate http friendly short names: {}", names.join(", "))]
    DuplicateShortNames { names: Vec<String> },

    #[error("artist {artist_id} has an empty short name")]
    EmptyShortName { artist_id: String },

    #[error("no album data available for artist {artist_id}")]
    NoAlbums { artist_id: String },

    #[error("album {album_id} has no images")]
    AlbumWithoutImages { album_id: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} of {total} artists could not be generated")]
    ArtistsFailed { failed: usize, total: usize },
}

impl GenerateError {
    /// Returns whether the error aborts the whole run rather than one artist.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DuplicateShortNames { .. }
                | Self::EmptyShortName { .. }
                | Self::Write { .. }
                | Self::ArtistsFailed { .. }
        )
    }
}
