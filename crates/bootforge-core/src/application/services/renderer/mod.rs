//! Java source and resource rendering.
//!
//! [`ArtifactRenderer`] turns an analyzed project into text. It never fails:
//! unknown input degrades to stubs or to text-typed fields, and every
//! degradation is reported as a [`Warning`]. Paths are not decided here; the
//! assembler places each artifact by its kind.

mod code;
mod controller;
mod dto;
mod layers;
mod model;
mod project;
mod security;
mod support;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::services::{api_analyzer::AnalyzedProject, type_inferencer::TypeInferencer};
use crate::domain::{
    AnalysisResult, ArtifactKind, CompatibilityMatrix, DatabaseProfile, EntityModel, Field,
    ProjectSpec, Warning,
};

pub use controller::{Operation, classify};

/// How entities are stored in the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Storage {
    /// No persistence: services keep a map and an `IdSequence`.
    InMemory,
    Relational,
    Document,
}

impl Storage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InMemory => "in-memory",
            Self::Relational => "relational",
            Self::Document => "document",
        }
    }
}

impl std::fmt::Display for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer needs to know about the project as a whole.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub spec: &'a ProjectSpec,
    pub project: &'a AnalyzedProject,
    /// Wired database profile; only consulted when persistence is needed.
    pub profile: Option<&'a DatabaseProfile>,
    /// `jakarta.*` imports instead of `javax.*`.
    pub jakarta: bool,
    package: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        spec: &'a ProjectSpec,
        project: &'a AnalyzedProject,
        profile: Option<&'a DatabaseProfile>,
        jakarta: bool,
    ) -> Self {
        Self {
            spec,
            project,
            profile,
            jakarta,
            package: spec.base_package(),
        }
    }

    pub fn analysis(&self) -> &AnalysisResult {
        &self.project.result
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// `<base>.<sub>`
    pub fn subpackage(&self, sub: &str) -> String {
        format!("{}.{sub}", self.package)
    }

    /// Enterprise namespace root: `jakarta` or `javax`.
    pub fn ee(&self) -> &'static str {
        if self.jakarta { "jakarta" } else { "javax" }
    }

    pub fn storage(&self) -> Storage {
        if !self.analysis().needs_persistence {
            return Storage::InMemory;
        }
        match self.profile {
            Some(profile) if !profile.is_relational() => Storage::Document,
            _ => Storage::Relational,
        }
    }

    /// Java type of every entity's `id`.
    pub fn id_type(&self) -> &'static str {
        match self.storage() {
            Storage::Document => "String",
            Storage::InMemory | Storage::Relational => "Long",
        }
    }

    pub fn is_enumeration(&self, declared_type: &str) -> bool {
        self.project.is_enumeration(declared_type)
    }

    pub fn profile_id(&self) -> Option<&str> {
        self.profile.map(|p| p.id.as_str())
    }
}

/// One rendered per-entity artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityArtifact {
    pub kind: ArtifactKind,
    pub content: String,
}

/// All artifacts of one entity, in [`ArtifactKind::PER_ENTITY`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntity {
    pub entity: String,
    pub artifacts: Vec<EntityArtifact>,
    pub warnings: Vec<Warning>,
}

impl RenderedEntity {
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.content.as_str())
    }
}

/// Where a project-level file lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "root", content = "path")]
pub enum Location {
    /// Relative to the project root.
    Root(String),
    /// Relative to `src/main/resources`.
    Resources(String),
    /// Relative to the base package directory under `src/main/java`.
    Source(String),
    /// Relative to the base package directory under `src/test/java`.
    TestSource(String),
}

/// One rendered project-level file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub location: Location,
    pub kind: ArtifactKind,
    pub content: String,
}

impl ProjectFile {
    fn new(location: Location, kind: ArtifactKind, content: String) -> Self {
        Self {
            location,
            kind,
            content,
        }
    }
}

/// Renders per-entity and project-level artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactRenderer {
    inferencer: TypeInferencer,
    matrix: CompatibilityMatrix,
}

impl ArtifactRenderer {
    pub fn new(inferencer: TypeInferencer, matrix: CompatibilityMatrix) -> Self {
        Self { inferencer, matrix }
    }

    /// Render the six per-entity artifacts, or five without persistence.
    #[instrument(skip_all, fields(entity = %entity.name))]
    pub fn render_entity(&self, ctx: &RenderContext<'_>, entity: &EntityModel) -> RenderedEntity {
        let exposed = self.exposed_fields(entity);
        let apis: Vec<_> = ctx.project.apis_for(&entity.name).collect();

        let mut artifacts = Vec::with_capacity(ArtifactKind::PER_ENTITY.len());
        artifacts.push(EntityArtifact {
            kind: ArtifactKind::DataModel,
            content: model::render_entity(ctx, entity),
        });
        if ctx.analysis().needs_persistence {
            artifacts.push(EntityArtifact {
                kind: ArtifactKind::AccessLayer,
                content: layers::render_repository(ctx, entity),
            });
        }
        artifacts.push(EntityArtifact {
            kind: ArtifactKind::ServiceLayer,
            content: layers::render_service(ctx, entity, &exposed),
        });

        let (handler, warnings) = controller::render(ctx, entity, &apis);
        artifacts.push(EntityArtifact {
            kind: ArtifactKind::RequestHandler,
            content: handler,
        });
        artifacts.push(EntityArtifact {
            kind: ArtifactKind::CreateInput,
            content: dto::render_create_request(ctx, entity),
        });
        artifacts.push(EntityArtifact {
            kind: ArtifactKind::Response,
            content: dto::render_response(ctx, entity, &exposed),
        });

        debug!(artifacts = artifacts.len(), warnings = warnings.len(), "Entity rendered");
        RenderedEntity {
            entity: entity.name.clone(),
            artifacts,
            warnings,
        }
    }

    /// Render every project-level file, in output order.
    #[instrument(skip_all, fields(project = %ctx.spec.name()))]
    pub fn render_project(&self, ctx: &RenderContext<'_>) -> Vec<ProjectFile> {
        let analysis = ctx.analysis();
        let mut files = vec![
            project::build_descriptor(ctx, &self.matrix),
            project::properties(ctx),
            project::application(ctx),
            project::web_config(ctx),
        ];

        if analysis.needs_authentication {
            files.extend(security::render(ctx));
        }
        if ctx.storage() == Storage::InMemory {
            files.push(support::id_sequence(ctx));
        }
        if analysis.needs_notifications {
            files.push(support::notification_service(ctx));
        }
        if analysis.needs_file_upload {
            files.push(support::file_storage_service(ctx));
        }
        files.extend(ctx.project.enumerations.iter().map(|e| model::render_enum(ctx, e)));
        if ctx.storage() == Storage::Relational {
            files.push(project::seed_data(ctx));
        }
        files.push(project::application_test(ctx));
        files.push(project::readme(ctx));
        files.push(project::gitignore());

        debug!(files = files.len(), "Project files rendered");
        files
    }

    /// Fields that appear in response payloads.
    fn exposed_fields<'e>(&self, entity: &'e EntityModel) -> Vec<&'e Field> {
        entity
            .fields
            .iter()
            .filter(|f| !code::is_audit_field(f))
            .filter(|f| !f.write_only && self.inferencer.is_exposed(&f.name))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
