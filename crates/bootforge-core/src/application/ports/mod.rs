//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `bootforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateCatalog`: Read-only templates and database profiles
//!   - `Filesystem`: File operations for materializing a FileSet
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CatalogLookup, Filesystem, TemplateCatalog};

#[cfg(test)]
pub use output::MockFilesystem;
