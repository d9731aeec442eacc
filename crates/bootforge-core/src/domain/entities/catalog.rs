//! Catalog records: reference-application templates and database profiles.

use serde::Serialize;

use crate::domain::{
    entities::model::{ApiModel, EntityModel, EnumModel},
    value_objects::StorageStyle,
};

/// Placeholder replaced by the project's database name in profile properties.
pub const DBNAME_PLACEHOLDER: &str = "{dbname}";

/// A pre-modeled reference application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub entities: Vec<EntityModel>,
    pub enumerations: Vec<EnumModel>,
    pub apis: Vec<ApiModel>,
}

impl TemplateEntry {
    pub fn entity(&self, name: &str) -> Option<&EntityModel> {
        self.entities.iter().find(|e| e.name == name)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }

    /// Check the invariants a catalog entry must hold.
    ///
    /// Relationship targets are deliberately not checked here; unresolved
    /// targets are dropped with a warning during analysis.
    pub fn validate(&self) -> Result<(), String> {
        if self.entities.is_empty() {
            return Err(format!("template '{}' has no entities", self.id));
        }
        let mut seen = std::collections::HashSet::new();
        for name in self
            .entities
            .iter()
            .map(|e| &e.name)
            .chain(self.enumerations.iter().map(|e| &e.name))
        {
            if !seen.insert(name.as_str()) {
                return Err(format!(
                    "template '{}' declares '{name}' more than once",
                    self.id
                ));
            }
        }
        if let Some(e) = self.enumerations.iter().find(|e| e.constants.is_empty()) {
            return Err(format!(
                "template '{}': enumeration '{}' has no constants",
                self.id, e.name
            ));
        }
        Ok(())
    }
}

/// A Maven coordinate contributed to the build descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MavenDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
}

impl MavenDependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            scope: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// `group:artifact`, used for de-duplication.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// A database wiring preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub use_case: String,
    pub storage: StorageStyle,
    /// Ordered key/value pairs, values may contain [`DBNAME_PLACEHOLDER`].
    pub properties: Vec<(String, String)>,
    pub dependencies: Vec<MavenDependency>,
}

impl DatabaseProfile {
    /// Properties with the database name substituted.
    pub fn render_properties(&self, dbname: &str) -> Vec<(String, String)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.clone(), v.replace(DBNAME_PLACEHOLDER, dbname)))
            .collect()
    }

    pub fn is_relational(&self) -> bool {
        self.storage == StorageStyle::Relational
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
