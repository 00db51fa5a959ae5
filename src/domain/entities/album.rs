//! Album records and their render-ready form.

use serde::Deserialize;

use super::ImageRef;

/// Album as published by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Catalog album identifier.
    pub id: String,
    /// Album title.
    pub name: String,
    /// Link opening the album in a player.
    #[serde(default)]
    pub url_to_open: Option<String>,
    /// Cover images, largest first.
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

/// Album with its cover split out from the remaining images.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct PreparedAlbum {
    pub id: String,
    pub name: String,
    pub url_to_open: Option<String>,
    /// Cover image.
    pub first_image: ImageRef,
    /// Remaining images. Holds the cover only when it is the sole image.
    pub images: Vec<ImageRef>,
}
