use crate::domain::{
    capabilities::CompatibilityMatrix,
    entities::{DatabaseProfile, TemplateEntry},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Catalog and matrix checks live here, not scattered across the adapters
/// that construct them.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_matrix(matrix: &CompatibilityMatrix) -> Result<(), DomainError> {
        matrix.validate().map_err(DomainError::CatalogIntegrity)
    }

    pub fn validate_template(template: &TemplateEntry) -> Result<(), DomainError> {
        template.validate().map_err(DomainError::CatalogIntegrity)
    }

    pub fn validate_database_profile(profile: &DatabaseProfile) -> Result<(), DomainError> {
        if profile.properties.is_empty() || profile.dependencies.is_empty() {
            return Err(DomainError::CatalogIntegrity(format!(
                "database profile '{}' needs properties and dependencies",
                profile.id
            )));
        }
        Ok(())
    }
}
