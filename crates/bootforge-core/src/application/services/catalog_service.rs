//! Read-only catalog queries for listing and describing.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    application::ports::TemplateCatalog,
    domain::{DatabaseProfile, DomainError, TemplateEntry},
    error::BootforgeResult,
};

/// Summary of a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub entities: Vec<String>,
    pub enumerations: Vec<String>,
    pub apis: Vec<String>,
    pub is_default: bool,
}

impl TemplateInfo {
    fn from_entry(entry: &TemplateEntry, default_id: &str) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            entities: entry.entity_names().map(str::to_string).collect(),
            enumerations: entry.enumerations.iter().map(|e| e.name.clone()).collect(),
            apis: entry.apis.iter().map(|a| a.name.clone()).collect(),
            is_default: entry.id == default_id,
        }
    }
}

/// Summary of a database profile for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub use_case: String,
    pub relational: bool,
    pub is_default: bool,
}

impl ProfileInfo {
    fn from_profile(profile: &DatabaseProfile, default_id: &str) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            description: profile.description.clone(),
            features: profile.features.clone(),
            use_case: profile.use_case.clone(),
            relational: profile.is_relational(),
            is_default: profile.id == default_id,
        }
    }
}

/// Answers `templates` and `databases` queries.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn TemplateCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn TemplateCatalog>) -> Self {
        Self { catalog }
    }

    pub fn list_templates(&self) -> Vec<TemplateInfo> {
        let default_id = self.catalog.default_template_id();
        self.catalog
            .templates()
            .iter()
            .map(|t| TemplateInfo::from_entry(t, default_id))
            .collect()
    }

    /// Exact lookup; no fallback here, an unknown id is an error.
    pub fn template(&self, id: &str) -> BootforgeResult<&TemplateEntry> {
        self.catalog
            .find(id)
            .ok_or_else(|| DomainError::TemplateNotFound { id: id.to_string() }.into())
    }

    pub fn describe_template(&self, id: &str) -> BootforgeResult<TemplateInfo> {
        let entry = self.template(id)?;
        Ok(TemplateInfo::from_entry(entry, self.catalog.default_template_id()))
    }

    pub fn list_database_profiles(&self) -> Vec<ProfileInfo> {
        let default_id = self.catalog.default_database_profile_id();
        self.catalog
            .database_profiles()
            .iter()
            .map(|p| ProfileInfo::from_profile(p, default_id))
            .collect()
    }

    pub fn database_profile(&self, id: &str) -> BootforgeResult<&DatabaseProfile> {
        self.catalog
            .database_profile(id)
            .ok_or_else(|| DomainError::DatabaseProfileNotFound { id: id.to_string() }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiModel, EntityModel, EnumModel, Purpose, StorageStyle};
    use crate::error::{BootforgeError, ErrorCategory};

    struct OneOfEach {
        templates: Vec<TemplateEntry>,
        profiles: Vec<DatabaseProfile>,
    }

    impl TemplateCatalog for OneOfEach {
        fn templates(&self) -> &[TemplateEntry] {
            &self.templates
        }
        fn default_template_id(&self) -> &str {
            "todo"
        }
        fn database_profiles(&self) -> &[DatabaseProfile] {
            &self.profiles
        }
        fn default_database_profile_id(&self) -> &str {
            "redis"
        }
    }

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(OneOfEach {
            templates: vec![TemplateEntry {
                id: "todo".into(),
                name: "Todo".into(),
                description: "Tasks".into(),
                entities: vec![EntityModel::new("Task")],
                enumerations: vec![EnumModel::new("Priority", ["LOW", "HIGH"])],
                apis: vec![ApiModel::new("Task Management", Purpose::Custom, "Task")],
            }],
            profiles: vec![DatabaseProfile {
                id: "redis".into(),
                name: "Redis".into(),
                description: "Key-value store".into(),
                features: vec!["Caching".into()],
                use_case: "Sessions".into(),
                storage: StorageStyle::Document,
                properties: Vec::new(),
                dependencies: Vec::new(),
            }],
        }))
    }

    #[test]
    fn lists_templates_with_default_marker() {
        let templates = service().list_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].entities, ["Task"]);
        assert_eq!(templates[0].enumerations, ["Priority"]);
        assert!(templates[0].is_default);
    }

    #[test]
    fn describe_is_case_insensitive_and_strict() {
        let service = service();
        assert_eq!(service.describe_template("TODO").unwrap().name, "Todo");
        let err = service.describe_template("nope").unwrap_err();
        assert!(matches!(err, BootforgeError::Domain(DomainError::TemplateNotFound { .. })));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn lists_profiles() {
        let service = service();
        let profiles = service.list_database_profiles();
        assert!(!profiles[0].relational);
        assert!(profiles[0].is_default);
        assert!(service.database_profile("mysql").is_err());
    }
}
