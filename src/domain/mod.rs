//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AccessToken, Album, Artist, ArtistSource, ImageDescriptor, ImageRef};
pub use errors::{CatalogError, DimensionError, GenerateError};
pub use ports::{CatalogPort, ImageDimensionPort, ModuleOutputPort};
