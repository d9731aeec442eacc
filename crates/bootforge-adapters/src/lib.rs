//! Infrastructure adapters for bootforge.
//!
//! This crate implements the ports defined in `bootforge-core::application::ports`
//! and owns every I/O operation: the shipped catalog data, filesystem access
//! and spec file parsing.

pub mod catalog;
pub mod filesystem;
pub mod spec_loader;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use spec_loader::{SpecFormat, SpecLoader, starter_spec};
