//! Project spec files.
//!
//! A spec file describes one generation run in TOML or JSON. Keys are
//! kebab-case in both formats.
//!
//! ```toml
//! name = "Shop API"
//! namespace = "com.acme"
//! runtime-version = "17"
//! framework-version = "3.3.0"
//! dependencies = ["actuator"]
//!
//! [features]
//! enable-security = false
//!
//! [[apis]]
//! name = "Products"
//! purpose = "product-catalog"
//! entity = "Product"
//! endpoints = ["GET /api/products", "POST /api/products"]
//! fields = ["name", "price", "stock"]
//! ```
//!
//! Template mode replaces `[[apis]]` with `template = "instagram"` and an
//! optional `database = "postgresql"`.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tracing::{debug, instrument};

use bootforge_core::{
    application::ApplicationError,
    domain::{ApiModel, Endpoint, FeatureToggles, Packaging, ProjectSpec, Purpose},
    error::BootforgeResult,
};

/// Serialization format of a spec file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Toml,
    Json,
}

impl SpecFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

// ── File types ────────────────────────────────────────────────────────────────

/// Deserialized spec file, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SpecFile {
    pub name: String,
    pub namespace: Option<String>,
    pub artifact_id: Option<String>,
    pub description: Option<String>,
    pub runtime_version: Option<String>,
    pub framework_version: Option<String>,
    pub packaging: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub server_port: Option<u32>,
    pub active_profile: Option<String>,
    #[serde(default)]
    pub features: FeatureToggles,
    #[serde(default)]
    pub apis: Vec<ApiEntry>,
    pub template: Option<String>,
    pub database: Option<String>,
}

/// One `[[apis]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ApiEntry {
    pub name: String,
    /// Derived from `name` when absent.
    pub purpose: Option<String>,
    /// Defaults to `name` with spaces removed.
    pub entity: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl ApiEntry {
    fn into_model(self) -> BootforgeResult<ApiModel> {
        let purpose = match &self.purpose {
            Some(p) => Purpose::from_str(p)?,
            None => Purpose::from_api_name(&self.name),
        };
        let entity = self
            .entity
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| self.name.split_whitespace().collect());
        Ok(ApiModel {
            name: self.name,
            purpose,
            entity: entity.trim().to_string(),
            description: self.description,
            endpoints: self.endpoints.iter().map(|e| Endpoint::parse(e)).collect(),
            fields: self.fields,
        })
    }
}

impl SpecFile {
    /// Normalize into a [`ProjectSpec`].
    pub fn into_spec(self) -> BootforgeResult<ProjectSpec> {
        let mut builder = ProjectSpec::builder(self.name)
            .dependencies(self.dependencies)
            .features(self.features);

        if let Some(v) = self.namespace {
            builder = builder.namespace(v);
        }
        if let Some(v) = self.artifact_id {
            builder = builder.artifact_id(v);
        }
        if let Some(v) = self.description {
            builder = builder.description(v);
        }
        if let Some(v) = self.runtime_version {
            builder = builder.runtime_version(v);
        }
        if let Some(v) = self.framework_version {
            builder = builder.framework_version(v);
        }
        if let Some(v) = self.packaging {
            builder = builder.packaging(Packaging::from_str(&v)?);
        }
        if let Some(v) = self.server_port {
            builder = builder.server_port(v);
        }
        if let Some(v) = self.active_profile {
            builder = builder.active_profile(v);
        }

        builder = match self.template {
            Some(template) => builder.template(template),
            None => builder.apis(
                self.apis
                    .into_iter()
                    .map(ApiEntry::into_model)
                    .collect::<BootforgeResult<Vec<_>>>()?,
            ),
        };
        if let Some(database) = self.database {
            builder = builder.database_profile(database);
        }

        Ok(builder.build()?)
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Reads spec files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecLoader;

impl SpecLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and normalize the spec at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> BootforgeResult<ProjectSpec> {
        let spec = self.read(path)?.into_spec()?;
        debug!(project = %spec.name(), mode = spec.mode().name(), "Spec loaded");
        Ok(spec)
    }

    /// Read the file at `path` without normalizing it, so callers can
    /// override keys first.
    pub fn read(&self, path: &Path) -> BootforgeResult<SpecFile> {
        let raw = fs::read_to_string(path).map_err(|e| load_failed(path, e))?;
        self.parse_file(&raw, SpecFormat::from_path(path), path)
    }

    /// Parse and normalize spec text. `origin` only labels errors.
    pub fn parse(&self, raw: &str, format: SpecFormat, origin: &Path) -> BootforgeResult<ProjectSpec> {
        self.parse_file(raw, format, origin)?.into_spec()
    }

    pub fn parse_file(&self, raw: &str, format: SpecFormat, origin: &Path) -> BootforgeResult<SpecFile> {
        let file: SpecFile = match format {
            SpecFormat::Toml => toml::from_str(raw).map_err(|e| load_failed(origin, e))?,
            SpecFormat::Json => serde_json::from_str(raw).map_err(|e| load_failed(origin, e))?,
        };
        if file.template.is_some() && !file.apis.is_empty() {
            return Err(load_failed(origin, "`template` and `[[apis]]` cannot be combined").into());
        }
        Ok(file)
    }
}

fn load_failed(path: &Path, reason: impl ToString) -> ApplicationError {
    ApplicationError::SpecLoadFailed {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}

/// A commented starter spec, as written by `bootforge init`.
pub fn starter_spec(name: &str, namespace: &str) -> String {
    format!(
        r#"# bootforge project spec
name = "{name}"
namespace = "{namespace}"
description = "Generated Spring Boot Application"
runtime-version = "17"
framework-version = "3.3.0"
packaging = "jar"
server-port = 8080
dependencies = ["actuator"]

# Force a requirement on regardless of API purposes.
[features]
enable-persistence = false
enable-security = false

# Either describe APIs...
[[apis]]
name = "User Management"
purpose = "user-management"
entity = "User"
endpoints = ["POST /api/users", "GET /api/users", "GET /api/users/{{id}}"]
fields = ["username", "email", "password"]

[[apis]]
name = "Product Catalog"
purpose = "product-catalog"
entity = "Product"
fields = ["name", "description", "price", "stock"]

# ...or clone a reference application instead (see `bootforge templates list`):
# template = "instagram"
# database = "postgresql"
"#
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
