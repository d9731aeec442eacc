// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for bootforge.
//!
//! This module contains the pure data model and rule tables of the synthesis
//! engine. Catalog access and filesystem writes are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable registries**: Rule tables are `static` slices
//! - **Rich domain model**: Normalization lives in `ProjectSpec`, collision
//!   checks in `FileSet`
//!
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

mod validation;

pub use entities::{
    AnalysisResult, ApiModel, DBNAME_PLACEHOLDER, DatabaseProfile, Endpoint, EntityModel, EnumModel, FeatureToggles,
    Field, FileSet, GeneratedFile, GenerationMode, MavenDependency, ProjectSpec,
    ProjectSpecBuilder, Relationship, RelationshipRef, TemplateEntry,
};

pub use capabilities::{CompatibilityMatrix, DependencyDef, FrameworkVersionDef};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    ArtifactKind, Cardinality, Constraint, HttpVerb, Packaging, Purpose, StorageStyle,
    ValueType, Warning, WarningKind,
};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn purpose_parses_with_aliases() {
        assert_eq!(Purpose::from_str("user-management").unwrap(), Purpose::UserManagement);
        assert_eq!(Purpose::from_str("FILE_MANAGEMENT").unwrap(), Purpose::FileManagement);
        assert_eq!(Purpose::from_str("cms").unwrap(), Purpose::ContentManagement);
        assert!(matches!(
            Purpose::from_str("payments"),
            Err(DomainError::UnknownPurpose { .. })
        ));
    }

    #[test]
    fn purpose_from_api_name() {
        assert_eq!(Purpose::from_api_name("User Management"), Purpose::UserManagement);
        assert_eq!(Purpose::from_api_name("Order Management"), Purpose::OrderManagement);
        assert_eq!(Purpose::from_api_name("Post Management"), Purpose::Custom);
    }

    #[test]
    fn purpose_round_trips_through_display() {
        for p in Purpose::ALL {
            assert_eq!(Purpose::from_str(&p.to_string()).unwrap(), p);
        }
    }

    #[test]
    fn cardinality_accepts_both_spellings() {
        assert_eq!(Cardinality::from_str("ManyToOne").unwrap(), Cardinality::ManyToOne);
        assert_eq!(Cardinality::from_str("one-to-many").unwrap(), Cardinality::OneToMany);
        assert!(Cardinality::from_str("some").is_err());
    }

    #[test]
    fn packaging_parses() {
        assert_eq!(Packaging::from_str("WAR").unwrap(), Packaging::War);
        assert!(matches!(
            Packaging::from_str("ear"),
            Err(DomainError::UnknownPackaging { .. })
        ));
    }

    #[test]
    fn per_entity_kinds_have_suffixes_and_packages() {
        for kind in ArtifactKind::PER_ENTITY {
            assert!(kind.suffix().is_some(), "{kind} has no suffix");
            assert!(kind.subpackage().is_some(), "{kind} has no package");
        }
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn collision_is_a_compatibility_error() {
        let err = DomainError::PathCollision {
            path: "a".into(),
            first: "User data-model".into(),
            second: "project enumeration".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert!(err.suggestions().iter().any(|s| s.contains("User data-model")));
    }
}
