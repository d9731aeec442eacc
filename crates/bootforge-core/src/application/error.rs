//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not engine
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The catalog cannot satisfy its own fallback contract.
    #[error("Template catalog is misconfigured: {reason}")]
    CatalogMisconfigured { reason: String },

    /// A project spec file could not be read or parsed.
    #[error("Failed to load project spec from {path}: {reason}")]
    SpecLoadFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Output directory already exists and overwriting was not requested.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogMisconfigured { .. } => vec![
                "The built-in catalog failed its own consistency check".into(),
                "This is likely a bug; please report it".into(),
            ],
            Self::SpecLoadFailed { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Spec files must be TOML (.toml) or JSON (.json)".into(),
                "Try: bootforge init to write a starter spec".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or choose a different --output directory".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![format!(
                "Remove the partially written directory manually: {}",
                path.display()
            )],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogMisconfigured { .. } => ErrorCategory::Internal,
            Self::SpecLoadFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}
