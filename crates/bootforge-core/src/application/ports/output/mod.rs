//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bootforge-adapters` crate provides implementations.

use std::path::Path;

use crate::application::ApplicationError;
use crate::domain::{DatabaseProfile, TemplateEntry};
use crate::error::BootforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `bootforge_adapters::filesystem::LocalFilesystem` (production)
/// - `bootforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The engine never calls this; only `ProjectWriter` does, after a FileSet
/// has been fully assembled.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BootforgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> BootforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> BootforgeResult<()>;
}

/// Result of a catalog lookup that may have fallen back to a default.
#[derive(Debug, Clone, Copy)]
pub struct CatalogLookup<'a, T> {
    pub entry: &'a T,
    /// `true` when the requested id was unknown and the default was returned.
    pub is_fallback: bool,
}

/// Port for the read-only catalog of templates and database profiles.
///
/// Implemented by:
/// - `bootforge_adapters::catalog::BuiltinCatalog` (shipped data)
///
/// Built once at process start and injected into the engine. Nothing here
/// mutates, so lookups hand out plain references.
pub trait TemplateCatalog: Send + Sync {
    /// All templates, in display order.
    fn templates(&self) -> &[TemplateEntry];

    /// Id of the entry returned for unknown template ids.
    fn default_template_id(&self) -> &str;

    /// All database profiles, in display order.
    fn database_profiles(&self) -> &[DatabaseProfile];

    /// Id of the profile used when none is requested.
    fn default_database_profile_id(&self) -> &str;

    /// Exact (case-insensitive) template lookup.
    fn find(&self, id: &str) -> Option<&TemplateEntry> {
        let id = id.trim();
        self.templates().iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Template lookup with fallback to the default entry.
    fn get(&self, id: &str) -> BootforgeResult<CatalogLookup<'_, TemplateEntry>> {
        if let Some(entry) = self.find(id) {
            return Ok(CatalogLookup {
                entry,
                is_fallback: false,
            });
        }
        let fallback = self.default_template_id();
        self.find(fallback)
            .map(|entry| CatalogLookup {
                entry,
                is_fallback: true,
            })
            .ok_or_else(|| {
                ApplicationError::CatalogMisconfigured {
                    reason: format!("default template '{fallback}' is not in the catalog"),
                }
                .into()
            })
    }

    /// Exact (case-insensitive) profile lookup.
    fn database_profile(&self, id: &str) -> Option<&DatabaseProfile> {
        let id = id.trim();
        self.database_profiles()
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
    }

    /// Profile lookup with fallback to the default profile.
    ///
    /// `None` asks for the default and is not reported as a fallback.
    fn resolve_database_profile(
        &self,
        id: Option<&str>,
    ) -> BootforgeResult<CatalogLookup<'_, DatabaseProfile>> {
        if let Some(entry) = id.and_then(|id| self.database_profile(id)) {
            return Ok(CatalogLookup {
                entry,
                is_fallback: false,
            });
        }
        let fallback = self.default_database_profile_id();
        self.database_profile(fallback)
            .map(|entry| CatalogLookup {
                entry,
                is_fallback: id.is_some(),
            })
            .ok_or_else(|| {
                ApplicationError::CatalogMisconfigured {
                    reason: format!("default database profile '{fallback}' is not in the catalog"),
                }
                .into()
            })
    }
}
