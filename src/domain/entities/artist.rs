//! Artist records as published by the catalog source.

use serde::Deserialize;

use super::ImageDescriptor;

/// Entry of the catalog's artist index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSource {
    /// Catalog artist identifier.
    pub id: String,
    /// URL-safe short name, unique across the catalog.
    pub http_friendly_short_name: String,
}

/// Reference to a remote image with optionally known dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    /// Fully-qualified image URL.
    pub url: String,
    /// Pixel width, if the source published it.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height, if the source published it.
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageRef {
    /// Returns true if either dimension is missing.
    #[must_use]
    pub const fn lacks_dimensions(&self) -> bool {
        self.width.is_none() || self.height.is_none()
    }

    /// Fills both dimensions from a resolved descriptor.
    pub const fn apply(&mut self, descriptor: ImageDescriptor) {
        self.width = Some(descriptor.width());
        self.height = Some(descriptor.height());
    }
}

/// Artist details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Catalog artist identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL-safe short name.
    pub http_friendly_short_name: String,
    /// Artist pictures, largest first.
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

impl Artist {
    /// Indices of images that still need their dimensions resolved.
    #[must_use]
    pub fn images_lacking_dimensions(&self) -> Vec<usize> {
        self.images
            .iter()
            .enumerate()
            .filter(|(_, image)| image.lacks_dimensions())
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_artist_with_partial_images() {
        let json = r#"{
            "id": "1dfeR4HaWDbWqFHLkxsg1d",
            "name": "Queen",
            "httpFriendlyShortName": "queen",
            "followers": 123,
            "images": [
                { "url": "https://i.scdn.co/a", "width": 640, "height": 640 },
                { "url": "https://i.scdn.co/b", "width": null, "height": null },
                { "url": "https://i.scdn.co/c" }
            ]
        }"#;

        let artist: Artist = serde_json::from_str(json).unwrap();

        assert_eq!(artist.http_friendly_short_name, "queen");
        assert_eq!(artist.images.len(), 3);
        assert_eq!(artist.images_lacking_dimensions(), vec![1, 2]);
    }

    #[test]
    fn test_apply_descriptor() {
        let mut image = ImageRef {
            url: "https://example.com/a.png".to_string(),
            width: None,
            height: Some(10),
        };
        image.apply(ImageDescriptor::new(300, 200).unwrap());

        assert_eq!(image.width, Some(300));
        assert_eq!(image.height, Some(200));
        assert!(!image.lacks_dimensions());
    }
}
