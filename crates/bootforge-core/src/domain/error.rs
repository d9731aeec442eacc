// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Generation degrades to warnings wherever it can, so this enum is small:
/// it only covers inputs that cannot be normalized and outputs that would
/// contradict themselves.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project spec: {0}")]
    InvalidProjectSpec(String),

    #[error("Server port {port} is outside the allowed range 1024-65535")]
    InvalidServerPort { port: u32 },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unknown purpose '{value}'")]
    UnknownPurpose { value: String },

    #[error("Unknown packaging '{value}'")]
    UnknownPackaging { value: String },

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("Two artifacts derive the same path '{path}': {first} and {second}")]
    PathCollision {
        path: String,
        first: String,
        second: String,
    },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No template with id '{id}'")]
    TemplateNotFound { id: String },

    #[error("No database profile with id '{id}'")]
    DatabaseProfileNotFound { id: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Catalog is inconsistent: {0}")]
    CatalogIntegrity(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectSpec(msg) => vec![
                "Check the project spec file".into(),
                format!("Details: {msg}"),
            ],
            Self::InvalidServerPort { .. } => vec![
                "Pick a port between 1024 and 65535".into(),
                "Ports below 1024 need elevated privileges".into(),
            ],
            Self::UnknownPurpose { .. } => vec![
                "Valid purposes: user-management, product-catalog, order-management,".into(),
                "  content-management, notification-system, file-management, custom".into(),
            ],
            Self::UnknownPackaging { .. } => vec!["Valid packaging values: jar, war".into()],
            Self::PathCollision { first, second, .. } => vec![
                format!("Rename one of '{first}' or '{second}'"),
                "Entity and enum names must be unique within a project".into(),
            ],
            Self::TemplateNotFound { .. } => vec!["Try: bootforge templates list".into()],
            Self::DatabaseProfileNotFound { .. } => vec!["Try: bootforge databases list".into()],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectSpec(_)
            | Self::InvalidServerPort { .. }
            | Self::MissingRequiredField { .. }
            | Self::UnknownPurpose { .. }
            | Self::UnknownPackaging { .. } => ErrorCategory::Validation,
            Self::PathCollision { .. } => ErrorCategory::Compatibility,
            Self::TemplateNotFound { .. } | Self::DatabaseProfileNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::CatalogIntegrity(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
