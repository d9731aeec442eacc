pub mod analysis;
pub mod catalog;
pub mod file_set;
pub mod model;
pub mod project_spec;

pub use crate::domain::DomainError;
pub use analysis::{AnalysisResult, RelationshipRef};
pub use catalog::{DBNAME_PLACEHOLDER, DatabaseProfile, MavenDependency, TemplateEntry};
pub use file_set::{FileSet, GeneratedFile};
pub use model::{ApiModel, Endpoint, EntityModel, EnumModel, Field, Relationship};
pub use project_spec::{FeatureToggles, GenerationMode, ProjectSpec, ProjectSpecBuilder};
