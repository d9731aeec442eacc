//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and render the results.  No
//! generation logic lives here.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod databases;
pub mod generate;
pub mod init;
pub mod templates;

use std::sync::Arc;

use tracing::debug;

use bootforge_adapters::BuiltinCatalog;
use bootforge_core::{
    application::{ApplicationError, CatalogService, GenerationService},
    domain::{CompatibilityMatrix, Warning},
};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// The built-in catalog, checked before first use.
pub(crate) fn catalog() -> CliResult<Arc<BuiltinCatalog>> {
    let catalog = BuiltinCatalog::new();
    catalog
        .validate()
        .map_err(|e| misconfigured(e.to_string()))?;
    debug!("Catalog validated");
    Ok(Arc::new(catalog))
}

pub(crate) fn generation_service() -> CliResult<GenerationService> {
    let matrix = CompatibilityMatrix::builtin();
    matrix
        .validate()
        .map_err(misconfigured)?;
    Ok(GenerationService::new(catalog()?, matrix))
}

fn misconfigured(reason: String) -> CliError {
    CliError::Core(ApplicationError::CatalogMisconfigured { reason }.into())
}

pub(crate) fn catalog_service() -> CliResult<CatalogService> {
    Ok(CatalogService::new(catalog()?))
}

/// Print engine warnings; they never fail a command.
pub(crate) fn print_warnings(warnings: &[Warning], output: &OutputManager) -> CliResult<()> {
    for warning in warnings {
        output.warning(&format!("[{}] {}", warning.kind, warning.message))?;
    }
    Ok(())
}
