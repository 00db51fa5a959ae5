//! Image dimension port definition.

use async_trait::async_trait;

use crate::domain::entities::ImageDescriptor;
use crate::domain::errors::DimensionError;

/// Port for reading the pixel dimensions of a remote image.
#[async_trait]
pub trait ImageDimensionPort: Send + Sync {
    /// Resolves width and height of the image at `url`.
    async fn fetch_dimensions(&self, url: &str) -> Result<ImageDescriptor, DimensionError>;
}
