//! The full declarative input of one generation run.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::model::ApiModel,
    error::DomainError,
    naming,
    value_objects::Packaging,
};

pub const DEFAULT_NAMESPACE: &str = "com.example";
pub const DEFAULT_ARTIFACT_ID: &str = "demo";
pub const DEFAULT_DESCRIPTION: &str = "Generated Spring Boot Application";
pub const DEFAULT_RUNTIME_VERSION: &str = "17";
pub const DEFAULT_FRAMEWORK_VERSION: &str = "3.3.0";
pub const DEFAULT_SERVER_PORT: u32 = 8080;
pub const DEFAULT_ACTIVE_PROFILE: &str = "dev";

/// Toggles that force a requirement on regardless of API purposes.
///
/// They never turn a requirement off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeatureToggles {
    #[serde(default)]
    pub enable_persistence: bool,
    #[serde(default)]
    pub enable_security: bool,
}

/// Where the entity and API set comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum GenerationMode {
    Custom {
        apis: Vec<ApiModel>,
        /// Database profile to wire when persistence is needed.
        database_profile: Option<String>,
    },
    Template {
        template_id: String,
        database_profile: Option<String>,
    },
}

impl GenerationMode {
    pub fn database_profile(&self) -> Option<&str> {
        match self {
            Self::Custom {
                database_profile, ..
            }
            | Self::Template {
                database_profile, ..
            } => database_profile.as_deref(),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Custom { .. } => "custom",
            Self::Template { .. } => "template",
        }
    }
}

/// A normalized project spec.
///
/// Only constructible through [`ProjectSpecBuilder`], so namespace and
/// artifact id are always valid identifiers by the time paths derive from
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    name: String,
    namespace: String,
    artifact_id: String,
    description: String,
    runtime_version: String,
    framework_version: String,
    packaging: Packaging,
    dependencies: Vec<String>,
    features: FeatureToggles,
    server_port: u32,
    active_profile: String,
    mode: GenerationMode,
}

impl ProjectSpec {
    pub fn builder(name: impl Into<String>) -> ProjectSpecBuilder {
        ProjectSpecBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    pub fn framework_version(&self) -> &str {
        &self.framework_version
    }

    pub fn packaging(&self) -> Packaging {
        self.packaging
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn features(&self) -> FeatureToggles {
        self.features
    }

    pub fn server_port(&self) -> u32 {
        self.server_port
    }

    pub fn active_profile(&self) -> &str {
        &self.active_profile
    }

    pub fn mode(&self) -> &GenerationMode {
        &self.mode
    }

    /// `com.example` + `my-shop` → `com.example.myshop`.
    pub fn base_package(&self) -> String {
        let mut leaf = self.artifact_id.replace('-', "");
        if leaf.starts_with(|c: char| c.is_ascii_digit()) {
            leaf.insert(0, '_');
        }
        format!("{}.{}", self.namespace, naming::escape_reserved(leaf))
    }

    /// Base package as a relative directory (`com/example/myshop`).
    pub fn package_dir(&self) -> String {
        self.base_package().replace('.', "/")
    }

    /// `my-shop` → `MyShop`. Prefix of the main class and its test.
    pub fn class_prefix(&self) -> String {
        naming::type_identifier(&self.artifact_id).unwrap_or_else(|| "Demo".into())
    }

    pub fn application_class(&self) -> String {
        format!("{}Application", self.class_prefix())
    }

    /// Database name substituted for `{dbname}` in profile properties.
    pub fn database_name(&self) -> String {
        self.artifact_id.replace('-', "_")
    }

    /// Replace the resolved versions and dependency set.
    pub fn with_resolution(
        mut self,
        runtime_version: impl Into<String>,
        framework_version: impl Into<String>,
        dependencies: Vec<String>,
    ) -> Self {
        self.runtime_version = runtime_version.into();
        self.framework_version = framework_version.into();
        self.dependencies = dependencies;
        self
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects raw, user-facing values and normalizes them in [`build`].
///
/// [`build`]: ProjectSpecBuilder::build
#[derive(Debug, Clone)]
pub struct ProjectSpecBuilder {
    name: String,
    namespace: Option<String>,
    artifact_id: Option<String>,
    description: Option<String>,
    runtime_version: Option<String>,
    framework_version: Option<String>,
    packaging: Packaging,
    dependencies: Vec<String>,
    features: FeatureToggles,
    server_port: u32,
    active_profile: Option<String>,
    mode: GenerationMode,
}

impl ProjectSpecBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            artifact_id: None,
            description: None,
            runtime_version: None,
            framework_version: None,
            packaging: Packaging::default(),
            dependencies: Vec::new(),
            features: FeatureToggles::default(),
            server_port: DEFAULT_SERVER_PORT,
            active_profile: None,
            mode: GenerationMode::Custom {
                apis: Vec::new(),
                database_profile: None,
            },
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = Some(version.into());
        self
    }

    pub fn framework_version(mut self, version: impl Into<String>) -> Self {
        self.framework_version = Some(version.into());
        self
    }

    pub fn packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = packaging;
        self
    }

    pub fn dependency(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    pub fn dependencies(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dependencies.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn features(mut self, features: FeatureToggles) -> Self {
        self.features = features;
        self
    }

    pub fn server_port(mut self, port: u32) -> Self {
        self.server_port = port;
        self
    }

    pub fn active_profile(mut self, profile: impl Into<String>) -> Self {
        self.active_profile = Some(profile.into());
        self
    }

    /// Custom mode over the given APIs.
    pub fn apis(mut self, apis: Vec<ApiModel>) -> Self {
        let database_profile = self.mode.database_profile().map(str::to_string);
        self.mode = GenerationMode::Custom {
            apis,
            database_profile,
        };
        self
    }

    /// Template mode over a catalog entry.
    pub fn template(mut self, template_id: impl Into<String>) -> Self {
        let database_profile = self.mode.database_profile().map(str::to_string);
        self.mode = GenerationMode::Template {
            template_id: template_id.into(),
            database_profile,
        };
        self
    }

    pub fn database_profile(mut self, profile: impl Into<String>) -> Self {
        let profile = Some(profile.into());
        match &mut self.mode {
            GenerationMode::Custom {
                database_profile, ..
            }
            | GenerationMode::Template {
                database_profile, ..
            } => *database_profile = profile,
        }
        self
    }

    pub fn mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Normalize and validate.
    ///
    /// Fails only for inputs that cannot be normalized: a blank project name
    /// or a server port outside 1024-65535.
    pub fn build(self) -> Result<ProjectSpec, DomainError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project name",
            });
        }

        if !(1024..=65535).contains(&self.server_port) {
            return Err(DomainError::InvalidServerPort {
                port: self.server_port,
            });
        }

        let artifact_id = self
            .artifact_id
            .as_deref()
            .map(normalize_artifact_id)
            .filter(|a| !a.is_empty())
            .or_else(|| Some(normalize_artifact_id(&name)).filter(|a| !a.is_empty()))
            .unwrap_or_else(|| DEFAULT_ARTIFACT_ID.to_string());

        let namespace = self
            .namespace
            .as_deref()
            .map(normalize_namespace)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let non_blank = |v: Option<String>, default: &str| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(ProjectSpec {
            name,
            namespace,
            artifact_id,
            description: non_blank(self.description, DEFAULT_DESCRIPTION),
            runtime_version: non_blank(self.runtime_version, DEFAULT_RUNTIME_VERSION),
            framework_version: non_blank(self.framework_version, DEFAULT_FRAMEWORK_VERSION),
            packaging: self.packaging,
            dependencies: self
                .dependencies
                .into_iter()
                .map(|d| d.trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            features: self.features,
            server_port: self.server_port,
            active_profile: non_blank(self.active_profile, DEFAULT_ACTIVE_PROFILE),
            mode: self.mode,
        })
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Lowercase; runs of anything outside `[a-z0-9]` collapse to one `-`;
/// leading and trailing `-` trimmed.
pub fn normalize_artifact_id(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().to_ascii_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

/// Lowercase dotted segments of `[a-z0-9_]`; empty segments dropped; a
/// segment starting with a digit gets a `_` prefix and a keyword segment a
/// `_` suffix.
pub fn normalize_namespace(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .split('.')
        .map(|segment| {
            let mut s: String = segment
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
                .collect();
            if s.starts_with(|c: char| c.is_ascii_digit()) {
                s.insert(0, '_');
            }
            naming::escape_reserved(s)
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let spec = ProjectSpec::builder("My Shop").build().unwrap();
        assert_eq!(spec.namespace(), "com.example");
        assert_eq!(spec.artifact_id(), "my-shop");
        assert_eq!(spec.runtime_version(), "17");
        assert_eq!(spec.framework_version(), "3.3.0");
        assert_eq!(spec.description(), DEFAULT_DESCRIPTION);
        assert_eq!(spec.server_port(), 8080);
        assert_eq!(spec.active_profile(), "dev");
    }

    #[test]
    fn derived_names() {
        let spec = ProjectSpec::builder("My Shop")
            .namespace("Com.Acme")
            .build()
            .unwrap();
        assert_eq!(spec.base_package(), "com.acme.myshop");
        assert_eq!(spec.package_dir(), "com/acme/myshop");
        assert_eq!(spec.application_class(), "MyShopApplication");
        assert_eq!(spec.database_name(), "my_shop");
    }

    #[test]
    fn artifact_id_normalization() {
        assert_eq!(normalize_artifact_id("  Hello, World!! "), "hello-world");
        assert_eq!(normalize_artifact_id("--a__b--"), "a-b");
        assert_eq!(normalize_artifact_id("!!!"), "");
    }

    #[test]
    fn namespace_normalization() {
        assert_eq!(normalize_namespace("Com.My-Org..app"), "com.myorg.app");
        assert_eq!(normalize_namespace("com.1st"), "com._1st");
        assert_eq!(normalize_namespace("..."), "");
        assert_eq!(normalize_namespace("com.new.int"), "com.new_.int_");
    }

    #[test]
    fn keyword_project_name_gets_legal_package() {
        let spec = ProjectSpec::builder("class")
            .namespace("com.new")
            .build()
            .unwrap();
        assert_eq!(spec.base_package(), "com.new_.class_");
        assert_eq!(spec.package_dir(), "com/new_/class_");
        assert_eq!(spec.application_class(), "ClassApplication");
        assert!(
            spec.base_package()
                .split('.')
                .all(|segment| !naming::is_reserved(segment))
        );
    }

    #[test]
    fn unusable_identifiers_fall_back() {
        let spec = ProjectSpec::builder("???")
            .namespace("!!")
            .build()
            .unwrap();
        assert_eq!(spec.artifact_id(), DEFAULT_ARTIFACT_ID);
        assert_eq!(spec.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn numeric_artifact_gets_safe_package() {
        let spec = ProjectSpec::builder("2048").build().unwrap();
        assert_eq!(spec.base_package(), "com.example._2048");
        assert_eq!(spec.application_class(), "E2048Application");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            ProjectSpec::builder("   ").build(),
            Err(DomainError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn privileged_port_is_rejected() {
        assert!(matches!(
            ProjectSpec::builder("x").server_port(80).build(),
            Err(DomainError::InvalidServerPort { port: 80 })
        ));
    }

    #[test]
    fn database_profile_survives_mode_switch() {
        let spec = ProjectSpec::builder("x")
            .database_profile("postgresql")
            .template("instagram")
            .build()
            .unwrap();
        assert_eq!(spec.mode().database_profile(), Some("postgresql"));
        assert_eq!(spec.mode().name(), "template");
    }
}
