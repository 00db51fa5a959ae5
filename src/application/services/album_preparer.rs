//! Shapes catalog data into the form the generated modules need.

use std::collections::BTreeMap;

use crate::domain::entities::{Album, ArtistSource, ModuleName, PreparedAlbum};
use crate::domain::errors::GenerateError;

/// Non-empty album list split into its first album and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedAlbums {
    /// First album in catalog order.
    pub head: PreparedAlbum,
    /// Remaining albums.
    pub tail: Vec<PreparedAlbum>,
}

impl PreparedAlbums {
    /// Total number of albums.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.tail.len()
    }
}

/// Splits the cover off an album's images.
///
/// The cover stays in the remaining list only when it is the sole image.
///
/// # Errors
/// Returns `GenerateError::AlbumWithoutImages` if the album has no image.
pub fn prepare_album(album: Album) -> Result<PreparedAlbum, GenerateError> {
    let Album {
        id,
        name,
        url_to_open,
        mut images,
    } = album;

    let Some(first_image) = images.first().cloned() else {
        return Err(GenerateError::AlbumWithoutImages { album_id: id });
    };

    if images.len() > 1 {
        images.remove(0);
    }

    Ok(PreparedAlbum {
        id,
        name,
        url_to_open,
        first_image,
        images,
    })
}

/// Prepares every album of an artist, keeping catalog order.
///
/// # Errors
/// Returns `GenerateError::NoAlbums` for an empty list, or the first album error.
pub fn prepare_albums(artist_id: &str, albums: Vec<Album>) -> Result<PreparedAlbums, GenerateError> {
    let mut prepared = albums
        .into_iter()
        .map(prepare_album)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();

    let head = prepared.next().ok_or_else(|| GenerateError::NoAlbums {
        artist_id: artist_id.to_string(),
    })?;

    Ok(PreparedAlbums {
        head,
        tail: prepared.collect(),
    })
}

/// Derives module names for all sources, rejecting empty or colliding names.
///
/// Two short names collide when they map to the same module name, which
/// includes exact duplicates.
///
/// # Errors
/// Returns `GenerateError::EmptyShortName` or `GenerateError::DuplicateShortNames`.
pub fn assign_module_names(
    sources: &[ArtistSource],
) -> Result<Vec<(ArtistSource, ModuleName)>, GenerateError> {
    let mut named = Vec::with_capacity(sources.len());
    let mut by_module: BTreeMap<String, Vec<&str>> = BTreeMap::new();

    for source in sources {
        let module = ModuleName::from_short_name(&source.http_friendly_short_name).ok_or_else(
            || GenerateError::EmptyShortName {
                artist_id: source.id.clone(),
            },
        )?;
        by_module
            .entry(module.as_str().to_string())
            .or_default()
            .push(&source.http_friendly_short_name);
        named.push((source.clone(), module));
    }

    let duplicates: Vec<String> = by_module
        .into_values()
        .filter(|names| names.len() > 1)
        .flatten()
        .map(str::to_string)
        .collect();

    if !duplicates.is_empty() {
        return Err(GenerateError::DuplicateShortNames { names: duplicates });
    }

    Ok(named)
}
