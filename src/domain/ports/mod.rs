mod catalog_port;
mod image_dimension_port;
mod module_output_port;

pub use catalog_port::CatalogPort;
pub use image_dimension_port::ImageDimensionPort;
pub use module_output_port::ModuleOutputPort;

#[cfg(test)]
pub mod mocks {
    pub use super::catalog_port::mock::InMemoryCatalog;
    pub use super::image_dimension_port::mock::{FixedDimensionPort, ScriptedDimensionPort};
    pub use super::module_output_port::mock::InMemoryOutput;
}
