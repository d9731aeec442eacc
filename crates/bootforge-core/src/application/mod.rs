//! Application layer for bootforge.
//!
//! This layer contains:
//! - **Services**: the synthesis pipeline and its orchestrators
//!   (GenerationService, ProjectWriter, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Rule tables and the data model live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    Analysis, CatalogService, Generation, GenerationService, ProfileInfo, ProjectWriter,
    TemplateInfo, WriteReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CatalogLookup, Filesystem, TemplateCatalog};

pub use error::ApplicationError;
