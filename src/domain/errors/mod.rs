//! Domain error types.

mod catalog_error;
mod dimension_error;
mod generate_error;

pub use catalog_error::CatalogError;
pub use dimension_error::DimensionError;
pub use generate_error::GenerateError;
