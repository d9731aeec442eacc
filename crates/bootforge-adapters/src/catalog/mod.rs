//! Built-in catalog of reference applications and database profiles.

mod profiles;
mod templates;

use bootforge_core::{
    application::ports::TemplateCatalog,
    domain::{DatabaseProfile, DomainError, DomainValidator as validator, TemplateEntry},
};
use tracing::debug;

/// Id of the template served for unknown template ids.
pub const DEFAULT_TEMPLATE_ID: &str = "freelancer";

/// Id of the profile used when a spec names none.
pub const DEFAULT_DATABASE_PROFILE_ID: &str = "h2";

/// The catalog compiled into the binary.
///
/// Built once and shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    templates: Vec<TemplateEntry>,
    profiles: Vec<DatabaseProfile>,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            templates: templates::all(),
            profiles: profiles::all(),
        };
        debug!(
            templates = catalog.templates.len(),
            profiles = catalog.profiles.len(),
            "Built-in catalog loaded"
        );
        catalog
    }

    /// Check every entry, plus that the defaults are present and every
    /// relationship target names an entity of the same template.
    pub fn validate(&self) -> Result<(), DomainError> {
        for template in &self.templates {
            validator::validate_template(template)?;
            for entity in &template.entities {
                if let Some(rel) = entity
                    .relationships
                    .iter()
                    .find(|r| template.entity(&r.target).is_none())
                {
                    return Err(DomainError::CatalogIntegrity(format!(
                        "template '{}': {} references unknown entity '{}'",
                        template.id, entity.name, rel.target
                    )));
                }
            }
        }
        for profile in &self.profiles {
            validator::validate_database_profile(profile)?;
        }
        if self.find(DEFAULT_TEMPLATE_ID).is_none() {
            return Err(DomainError::TemplateNotFound {
                id: DEFAULT_TEMPLATE_ID.to_string(),
            });
        }
        if self.database_profile(DEFAULT_DATABASE_PROFILE_ID).is_none() {
            return Err(DomainError::DatabaseProfileNotFound {
                id: DEFAULT_DATABASE_PROFILE_ID.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn templates(&self) -> &[TemplateEntry] {
        &self.templates
    }

    fn default_template_id(&self) -> &str {
        DEFAULT_TEMPLATE_ID
    }

    fn database_profiles(&self) -> &[DatabaseProfile] {
        &self.profiles
    }

    fn default_database_profile_id(&self) -> &str {
        DEFAULT_DATABASE_PROFILE_ID
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bootforge_core::domain::{DBNAME_PLACEHOLDER, Purpose, StorageStyle};

    use super::*;

    const JAVA_TYPES: [&str; 8] = [
        "String",
        "Long",
        "Integer",
        "Double",
        "Boolean",
        "BigDecimal",
        "LocalDate",
        "LocalDateTime",
    ];

    #[test]
    fn ships_ten_templates_and_six_profiles() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(catalog.templates().len(), 10);
        assert_eq!(catalog.database_profiles().len(), 6);
        catalog.validate().unwrap();
    }

    #[test]
    fn ids_are_unique() {
        let catalog = BuiltinCatalog::new();
        let ids: HashSet<_> = catalog.templates().iter().map(|t| &t.id).collect();
        assert_eq!(ids.len(), catalog.templates().len());
        let ids: HashSet<_> = catalog.database_profiles().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), catalog.database_profiles().len());
    }

    #[test]
    fn instagram_has_eight_entities() {
        let catalog = BuiltinCatalog::new();
        let instagram = catalog.find("instagram").unwrap();
        assert_eq!(
            instagram.entity_names().collect::<Vec<_>>(),
            [
                "User",
                "Post",
                "PostMedia",
                "Story",
                "Follow",
                "Like",
                "Comment",
                "DirectMessage"
            ]
        );
    }

    #[test]
    fn unknown_template_falls_back_to_freelancer() {
        let catalog = BuiltinCatalog::new();
        let lookup = catalog.get("myspace").unwrap();
        assert!(lookup.is_fallback);
        assert_eq!(lookup.entry.id, "freelancer");
        assert!(!catalog.get("GitHub").unwrap().is_fallback);
    }

    #[test]
    fn inverse_sides_name_an_existing_property() {
        for template in BuiltinCatalog::new().templates() {
            for entity in &template.entities {
                for rel in &entity.relationships {
                    let Some(mapped_by) = &rel.mapped_by else {
                        continue;
                    };
                    let target = template.entity(&rel.target).unwrap();
                    assert!(
                        target.association_names().contains(mapped_by),
                        "{}: {}.{mapped_by} does not exist",
                        template.id,
                        target.name
                    );
                }
            }
        }
    }

    #[test]
    fn field_types_are_java_types_or_enumerations() {
        for template in BuiltinCatalog::new().templates() {
            let enums: Vec<&str> = template.enumerations.iter().map(|e| e.name.as_str()).collect();
            for entity in &template.entities {
                for field in &entity.fields {
                    let ty = field.declared_type.as_str();
                    assert!(
                        JAVA_TYPES.contains(&ty) || enums.contains(&ty),
                        "{}: {}.{} has unknown type {ty}",
                        template.id,
                        entity.name,
                        field.name
                    );
                }
            }
        }
    }

    #[test]
    fn every_api_serves_a_declared_entity() {
        for template in BuiltinCatalog::new().templates() {
            assert!(!template.apis.is_empty(), "{} has no APIs", template.id);
            for api in &template.apis {
                assert!(template.entity(&api.entity).is_some(), "{}: {}", template.id, api.name);
                assert!(!api.endpoints.is_empty());
            }
        }
    }

    #[test]
    fn purposes_come_from_api_names() {
        let catalog = BuiltinCatalog::new();
        let zomato = catalog.find("zomato").unwrap();
        assert_eq!(zomato.apis[1].purpose, Purpose::OrderManagement);
        assert_eq!(zomato.apis[0].purpose, Purpose::Custom);
        assert_eq!(
            catalog.find("github").unwrap().apis[0].purpose,
            Purpose::UserManagement
        );
    }

    #[test]
    fn profiles_substitute_the_database_name() {
        let catalog = BuiltinCatalog::new();
        for id in ["mysql", "postgresql", "h2", "mongodb", "sqlite"] {
            let profile = catalog.database_profile(id).unwrap();
            assert!(
                profile.properties.iter().any(|(_, v)| v.contains(DBNAME_PLACEHOLDER)),
                "{id} has no database name placeholder"
            );
            assert!(
                profile
                    .render_properties("shop")
                    .iter()
                    .all(|(_, v)| !v.contains(DBNAME_PLACEHOLDER))
            );
        }
        let h2 = catalog.database_profile("h2").unwrap();
        assert_eq!(
            h2.render_properties("shop")[1].1,
            "jdbc:h2:mem:shop;DB_CLOSE_DELAY=-1;DB_CLOSE_ON_EXIT=FALSE"
        );
    }

    #[test]
    fn only_mongodb_is_a_document_store() {
        let catalog = BuiltinCatalog::new();
        let document: Vec<_> = catalog
            .database_profiles()
            .iter()
            .filter(|p| p.storage == StorageStyle::Document)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(document, ["mongodb"]);
    }

    #[test]
    fn default_profile_resolves_without_fallback_flag() {
        let catalog = BuiltinCatalog::new();
        let lookup = catalog.resolve_database_profile(None).unwrap();
        assert_eq!(lookup.entry.id, "h2");
        assert!(!lookup.is_fallback);
        assert!(catalog.resolve_database_profile(Some("db2")).unwrap().is_fallback);
    }
}
