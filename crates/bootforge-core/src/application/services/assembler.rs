//! Places rendered artifacts at their paths and builds the [`FileSet`].

use tracing::{debug, instrument};

use crate::application::services::renderer::{Location, ProjectFile, RenderedEntity};
use crate::domain::{ArtifactKind, DomainError, FileSet, ProjectSpec};

const MAIN_JAVA: &str = "src/main/java";
const TEST_JAVA: &str = "src/test/java";
const RESOURCES: &str = "src/main/resources";

/// Origin recorded for project-level files.
pub const PROJECT_ORIGIN: &str = "project";

/// Merges project-level files and per-entity artifacts into one ordered set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSetAssembler;

impl FileSetAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Project files first, in the order given, then each entity's artifacts
    /// in declaration order.
    ///
    /// # Errors
    ///
    /// [`DomainError::PathCollision`] when two artifacts derive the same path.
    #[instrument(skip_all, fields(project = %spec.name(), entities = entities.len()))]
    pub fn assemble(
        &self,
        spec: &ProjectSpec,
        entities: &[RenderedEntity],
        project_files: Vec<ProjectFile>,
    ) -> Result<FileSet, DomainError> {
        let package_dir = spec.package_dir();
        let mut set = FileSet::new();

        for file in project_files {
            let path = project_path(&package_dir, &file.location);
            set.insert(path, file.content, file.kind, PROJECT_ORIGIN)?;
        }

        for rendered in entities {
            for artifact in &rendered.artifacts {
                let path = entity_path(&package_dir, &rendered.entity, artifact.kind)?;
                set.insert(path, artifact.content.clone(), artifact.kind, &rendered.entity)?;
            }
            debug!(entity = %rendered.entity, "Entity artifacts placed");
        }

        debug!(files = set.len(), bytes = set.total_bytes(), "FileSet assembled");
        Ok(set)
    }
}

fn project_path(package_dir: &str, location: &Location) -> String {
    match location {
        Location::Root(path) => path.clone(),
        Location::Resources(path) => format!("{RESOURCES}/{path}"),
        Location::Source(path) => format!("{MAIN_JAVA}/{package_dir}/{path}"),
        Location::TestSource(path) => format!("{TEST_JAVA}/{package_dir}/{path}"),
    }
}

/// `src/main/java/<package>/<subpackage>/<Entity><Suffix>.java`
pub fn entity_path(package_dir: &str, entity: &str, kind: ArtifactKind) -> Result<String, DomainError> {
    match (kind.subpackage(), kind.suffix()) {
        (Some(sub), Some(suffix)) => Ok(format!("{MAIN_JAVA}/{package_dir}/{sub}/{entity}{suffix}.java")),
        _ => Err(DomainError::InvalidProjectSpec(format!(
            "{kind} is not a per-entity artifact"
        ))),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
