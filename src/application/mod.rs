//! Application layer with use cases and services.

/// Domain services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{RetryPolicy, RetryingDimensionFetcher};
pub use use_cases::{GenerateModulesUseCase, GenerateReport, ResolveDimensionsUseCase};
