//! Generated module output.

pub mod module_writer;

pub use module_writer::ElmModuleWriter;
