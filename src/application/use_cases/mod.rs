//! Use case implementations.

mod generate_modules_use_case;
mod resolve_dimensions_use_case;

pub use generate_modules_use_case::{ArtistFailure, GenerateModulesUseCase, GenerateReport};
pub use resolve_dimensions_use_case::ResolveDimensionsUseCase;
