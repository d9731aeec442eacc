//! Generation service - the main application orchestrator.
//!
//! Runs the synthesis pipeline for one [`ProjectSpec`]:
//! 1. Resolve versions and dependencies against the compatibility matrix
//! 2. Analyze the custom APIs or the chosen template
//! 3. Render every entity and the project-level files
//! 4. Assemble the ordered [`FileSet`]
//!
//! Nothing here touches the filesystem; see [`ProjectWriter`] for that.
//!
//! [`ProjectWriter`]: super::ProjectWriter

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::TemplateCatalog,
        services::{
            api_analyzer::{AnalyzedProject, ApiAnalyzer},
            assembler::FileSetAssembler,
            compatibility::{CompatibilityResolver, Resolution},
            renderer::{ArtifactRenderer, RenderContext, Storage},
            type_inferencer::TypeInferencer,
        },
    },
    domain::{
        CompatibilityMatrix, DatabaseProfile, FeatureToggles, FileSet, GenerationMode,
        ProjectSpec, Warning, WarningKind,
    },
    error::BootforgeResult,
};

/// Resolution and analysis of a spec, without rendered output.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The spec with resolved versions and dependencies.
    pub spec: ProjectSpec,
    pub resolution: Resolution,
    pub project: AnalyzedProject,
    /// Template actually used, after fallback.
    pub template: Option<String>,
    /// Database profile actually wired, if persistence is needed.
    pub database_profile: Option<String>,
    pub storage: Storage,
    /// Resolution, catalog and analysis warnings, in that order.
    pub warnings: Vec<Warning>,
}

/// The result of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub spec: ProjectSpec,
    pub resolution: Resolution,
    pub project: AnalyzedProject,
    pub template: Option<String>,
    pub database_profile: Option<String>,
    pub storage: Storage,
    pub file_set: FileSet,
    /// Every warning of the run, rendering warnings last.
    pub warnings: Vec<Warning>,
}

/// Runs the synthesis pipeline.
///
/// Constructed once with the catalog and matrix; holds nothing mutable, so
/// one instance can serve any number of runs.
#[derive(Clone)]
pub struct GenerationService {
    catalog: Arc<dyn TemplateCatalog>,
    resolver: CompatibilityResolver,
    analyzer: ApiAnalyzer,
    renderer: ArtifactRenderer,
    assembler: FileSetAssembler,
}

impl std::fmt::Debug for GenerationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationService")
            .field("templates", &self.catalog.templates().len())
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl GenerationService {
    /// Create a service over the given catalog and matrix.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use bootforge_core::{application::GenerationService, domain::CompatibilityMatrix};
    ///
    /// # fn catalog() -> Arc<dyn bootforge_core::application::ports::TemplateCatalog> { unimplemented!() }
    /// let service = GenerationService::new(catalog(), CompatibilityMatrix::builtin());
    /// ```
    pub fn new(catalog: Arc<dyn TemplateCatalog>, matrix: CompatibilityMatrix) -> Self {
        let inferencer = TypeInferencer::default();
        Self {
            catalog,
            resolver: CompatibilityResolver::new(matrix),
            analyzer: ApiAnalyzer::new(inferencer),
            renderer: ArtifactRenderer::new(inferencer, matrix),
            assembler: FileSetAssembler::new(),
        }
    }

    pub fn catalog(&self) -> &dyn TemplateCatalog {
        self.catalog.as_ref()
    }

    /// Resolve and analyze without rendering.
    #[instrument(skip_all, fields(project = %spec.name(), mode = spec.mode().name()))]
    pub fn analyze(&self, spec: &ProjectSpec) -> BootforgeResult<Analysis> {
        let resolution = self.resolver.resolve(
            spec.runtime_version(),
            spec.framework_version(),
            spec.dependencies(),
        );
        let spec = spec.clone().with_resolution(
            resolution.runtime_version.clone(),
            resolution.framework_version.clone(),
            resolution.dependencies.clone(),
        );
        let mut warnings = resolution.warnings.clone();

        let (project, template, profile) = match spec.mode() {
            GenerationMode::Custom {
                apis,
                database_profile,
            } => {
                let project = self.analyzer.analyze_custom(apis, spec.features());
                let profile = if project.result.needs_persistence {
                    Some(self.database_profile(database_profile.as_deref(), &mut warnings)?)
                } else {
                    None
                };
                (project, None, profile)
            }
            GenerationMode::Template {
                template_id,
                database_profile,
            } => {
                let lookup = self.catalog.get(template_id)?;
                if lookup.is_fallback {
                    warnings.push(Warning::new(
                        WarningKind::UnknownTemplate,
                        format!(
                            "Template '{template_id}' is not in the catalog; using '{}'",
                            lookup.entry.id
                        ),
                    ));
                }
                // Catalog templates always carry a data model.
                let features = FeatureToggles {
                    enable_persistence: true,
                    ..spec.features()
                };
                let project = self.analyzer.analyze_template(lookup.entry, features);
                let profile = self.database_profile(database_profile.as_deref(), &mut warnings)?;
                (project, Some(lookup.entry.id.clone()), Some(profile))
            }
        };
        warnings.extend(project.warnings.iter().cloned());

        let storage = RenderContext::new(&spec, &project, profile, resolution.jakarta).storage();
        let database_profile = profile.map(|p| p.id.clone());

        info!(
            entities = project.entities.len(),
            apis = project.apis.len(),
            storage = ?storage,
            "Project analyzed"
        );

        Ok(Analysis {
            spec,
            resolution,
            project,
            template,
            database_profile,
            storage,
            warnings,
        })
    }

    /// Run the whole pipeline and return the assembled file set.
    ///
    /// # Errors
    ///
    /// Fails only on a misconfigured catalog or a path collision between two
    /// artifacts. Everything else degrades to warnings.
    #[instrument(skip_all, fields(project = %spec.name(), mode = spec.mode().name()))]
    pub fn generate(&self, spec: &ProjectSpec) -> BootforgeResult<Generation> {
        let Analysis {
            spec,
            resolution,
            project,
            template,
            database_profile,
            storage,
            mut warnings,
        } = self.analyze(spec)?;

        let profile = database_profile
            .as_deref()
            .and_then(|id| self.catalog.database_profile(id));
        let ctx = RenderContext::new(&spec, &project, profile, resolution.jakarta);

        let rendered: Vec<_> = project
            .entities
            .iter()
            .map(|entity| self.renderer.render_entity(&ctx, entity))
            .collect();
        let project_files = self.renderer.render_project(&ctx);
        for entity in &rendered {
            warnings.extend(entity.warnings.iter().cloned());
        }

        let file_set = self.assembler.assemble(&spec, &rendered, project_files)?;

        for warning in &warnings {
            warn!(kind = %warning.kind, "{}", warning.message);
        }
        info!(
            files = file_set.len(),
            bytes = file_set.total_bytes(),
            warnings = warnings.len(),
            "Generation completed"
        );

        Ok(Generation {
            spec,
            resolution,
            project,
            template,
            database_profile,
            storage,
            file_set,
            warnings,
        })
    }

    fn database_profile(
        &self,
        requested: Option<&str>,
        warnings: &mut Vec<Warning>,
    ) -> BootforgeResult<&DatabaseProfile> {
        let lookup = self.catalog.resolve_database_profile(requested)?;
        if lookup.is_fallback {
            warnings.push(Warning::new(
                WarningKind::UnknownDatabaseProfile,
                format!(
                    "Database profile '{}' is not in the catalog; using '{}'",
                    requested.unwrap_or_default(),
                    lookup.entry.id
                ),
            ));
        }
        debug!(profile = %lookup.entry.id, "Database profile resolved");
        Ok(lookup.entry)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
