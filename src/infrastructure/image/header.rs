//! Image header sniffing.

use imagesize::ImageError;

use crate::domain::entities::ImageDescriptor;
use crate::domain::errors::DimensionError;

/// Reads pixel dimensions from the leading bytes of an image.
///
/// # Errors
/// Returns `DimensionError::HeaderParse` if the format is unknown, the header is
/// cut short, or it declares a zero or out-of-range dimension.
pub fn parse_dimensions(url: &str, bytes: &[u8]) -> Result<ImageDescriptor, DimensionError> {
    if bytes.is_empty() {
        return Err(DimensionError::header_parse(url, "empty body"));
    }

    let size = imagesize::blob_size(bytes).map_err(|e| {
        let reason = match e {
            ImageError::NotSupported => "unrecognised image format".to_string(),
            ImageError::CorruptedImage => "corrupted image header".to_string(),
            other => format!("incomplete image header: {other}"),
        };
        DimensionError::header_parse(url, format!("{reason} ({} bytes read)", bytes.len()))
    })?;

    let width = u32::try_from(size.width)
        .map_err(|_| DimensionError::header_parse(url, "width out of range"))?;
    let height = u32::try_from(size.height)
        .map_err(|_| DimensionError::header_parse(url, "height out of range"))?;

    ImageDescriptor::new(width, height).ok_or_else(|| {
        DimensionError::header_parse(url, format!("header declares {width}x{height}"))
    })
}
