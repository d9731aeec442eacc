//! Runtime / framework / dependency resolution against the compatibility
//! matrix.
//!
//! Resolution never fails. Incompatible requests are auto-corrected and each
//! correction is reported as a [`WarningKind::ConfigIncompatibility`] warning.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{
    Warning, WarningKind,
    capabilities::{CompatibilityMatrix, FrameworkVersionDef, compare_versions},
};

/// Outcome of [`CompatibilityResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub runtime_version: String,
    pub framework_version: String,
    pub dependencies: Vec<String>,
    /// Whether the resolved framework uses `jakarta.*` imports.
    pub jakarta: bool,
    pub warnings: Vec<Warning>,
}

/// Validates and corrects version pairs and filters dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityResolver {
    matrix: CompatibilityMatrix,
}

impl CompatibilityResolver {
    pub fn new(matrix: CompatibilityMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &CompatibilityMatrix {
        &self.matrix
    }

    /// Resolve a requested (runtime, framework, dependencies) triple.
    ///
    /// The returned pair is always one of the matrix's supported
    /// combinations, provided the matrix passes `validate()`.
    #[instrument(skip_all, fields(runtime = %runtime_version, framework = %framework_version))]
    pub fn resolve(
        &self,
        runtime_version: &str,
        framework_version: &str,
        requested_deps: &[String],
    ) -> Resolution {
        let mut warnings = Vec::new();
        let runtime_version = runtime_version.trim();
        let framework_version = framework_version.trim();

        let framework = match self.matrix.find_framework(framework_version) {
            Some(def) => Some(def),
            None => {
                let replacement = self
                    .matrix
                    .frameworks_supporting(runtime_version)
                    .next()
                    .or_else(|| self.matrix.default_framework());
                if let Some(def) = replacement {
                    warnings.push(Warning::new(
                        WarningKind::ConfigIncompatibility,
                        format!(
                            "Framework version {framework_version} is not in the compatibility matrix; using {}",
                            def.version
                        ),
                    ));
                }
                replacement
            }
        };

        // An empty matrix leaves nothing to check against: pass through.
        let Some(framework) = framework else {
            warnings.push(Warning::new(
                WarningKind::ConfigIncompatibility,
                "Compatibility matrix is empty; versions passed through unchecked",
            ));
            return Resolution {
                runtime_version: runtime_version.to_string(),
                framework_version: framework_version.to_string(),
                dependencies: dedup(requested_deps),
                jakarta: true,
                warnings,
            };
        };

        let runtime = self.correct_runtime(framework, runtime_version, &mut warnings);
        let dependencies = self.filter_dependencies(framework, &runtime, requested_deps, &mut warnings);

        debug!(
            runtime = %runtime,
            framework = framework.version,
            dependencies = dependencies.len(),
            warnings = warnings.len(),
            "Compatibility resolved"
        );

        Resolution {
            runtime_version: runtime,
            framework_version: framework.version.to_string(),
            dependencies,
            jakarta: framework.jakarta,
            warnings,
        }
    }

    fn correct_runtime(
        &self,
        framework: &FrameworkVersionDef,
        runtime: &str,
        warnings: &mut Vec<Warning>,
    ) -> String {
        if framework.supports_runtime(runtime) {
            return runtime.to_string();
        }

        // Non-empty by matrix invariant; fall back to the requested value otherwise.
        let corrected = framework
            .supported_runtimes
            .first()
            .copied()
            .unwrap_or(runtime);

        warnings.push(Warning::new(
            WarningKind::ConfigIncompatibility,
            format!(
                "Java {runtime} is not supported by Spring Boot {} (supported: {}); using Java {corrected}",
                framework.version,
                framework.supported_runtimes.join(", ")
            ),
        ));
        corrected.to_string()
    }

    fn filter_dependencies(
        &self,
        framework: &FrameworkVersionDef,
        runtime: &str,
        requested: &[String],
        warnings: &mut Vec<Warning>,
    ) -> Vec<String> {
        dedup(requested)
            .into_iter()
            .filter(|id| match self.matrix.find_dependency(id) {
                None => {
                    warnings.push(Warning::new(
                        WarningKind::ConfigIncompatibility,
                        format!("Dependency '{id}' is not in the compatibility matrix; kept unchecked"),
                    ));
                    true
                }
                Some(def) => {
                    let framework_ok = compare_versions(framework.version, def.min_framework).is_ge();
                    let runtime_ok = compare_versions(runtime, def.min_runtime).is_ge();
                    if !(framework_ok && runtime_ok) {
                        warnings.push(Warning::new(
                            WarningKind::ConfigIncompatibility,
                            format!(
                                "Dependency '{id}' needs Spring Boot {}+ and Java {}+; dropped",
                                def.min_framework, def.min_runtime
                            ),
                        ));
                    }
                    framework_ok && runtime_ok
                }
            })
            .collect()
    }
}

fn dedup(ids: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.iter()
        .map(|id| id.trim().to_ascii_lowercase())
        .filter(|id| !id.is_empty() && seen.insert(id.clone()))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
