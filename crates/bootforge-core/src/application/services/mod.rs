//! Application services - orchestrate use cases.
//!
//! The engine pipeline, leaves first: [`CompatibilityResolver`],
//! [`TypeInferencer`], [`ApiAnalyzer`], [`ArtifactRenderer`] and
//! [`FileSetAssembler`]. [`GenerationService`] runs them in order;
//! [`ProjectWriter`] and [`CatalogService`] serve the CLI.

pub mod api_analyzer;
pub mod assembler;
pub mod catalog_service;
pub mod compatibility;
pub mod generation_service;
pub mod project_writer;
pub mod renderer;
pub mod type_inferencer;

pub use api_analyzer::{AnalyzedProject, ApiAnalyzer};
pub use assembler::FileSetAssembler;
pub use catalog_service::{CatalogService, ProfileInfo, TemplateInfo};
pub use compatibility::{CompatibilityResolver, Resolution};
pub use generation_service::{Analysis, Generation, GenerationService};
pub use project_writer::{ProjectWriter, WriteReport};
pub use renderer::{ArtifactRenderer, RenderContext, RenderedEntity, Storage};
pub use type_inferencer::{InferredType, TypeInferencer};
