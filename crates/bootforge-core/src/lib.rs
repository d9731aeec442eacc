//! bootforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the bootforge
//! Spring Boot project synthesis engine, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          bootforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerationService, ProjectWriter, ...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TemplateCatalog, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   bootforge-adapters (Infrastructure)   │
//! │ (BuiltinCatalog, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectSpec, FileSet, rule registries) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bootforge_core::prelude::*;
//!
//! # fn catalog() -> Arc<dyn TemplateCatalog> { unimplemented!() }
//! // 1. Describe the project
//! let spec = ProjectSpec::builder("Shop API")
//!     .namespace("com.acme")
//!     .template("ecommerce")
//!     .build()
//!     .unwrap();
//!
//! // 2. Run the engine (with an injected catalog)
//! let service = GenerationService::new(catalog(), CompatibilityMatrix::builtin());
//! let generation = service.generate(&spec).unwrap();
//! for file in &generation.file_set {
//!     println!("{}", file.path);
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Analysis, CatalogService, Generation, GenerationService, ProfileInfo, ProjectWriter,
        TemplateInfo, WriteReport,
        ports::{Filesystem, TemplateCatalog},
    };
    pub use crate::domain::{
        ApiModel, CompatibilityMatrix, DatabaseProfile, FeatureToggles, FileSet, GeneratedFile,
        GenerationMode, Packaging, ProjectSpec, ProjectSpecBuilder, Purpose, TemplateEntry,
        Warning, WarningKind,
    };
    pub use crate::error::{BootforgeError, BootforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
