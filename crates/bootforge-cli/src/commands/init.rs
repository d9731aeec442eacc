//! `bootforge init`: write a starter spec file.

use std::path::Path;

use tracing::info;

use bootforge_adapters::starter_spec;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write a commented starter spec to `args.path`.
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.path.exists() && !args.force {
        return Err(CliError::FileExists { path: args.path });
    }

    let name = args.name.unwrap_or_else(|| default_name(&args.path));
    let namespace = args
        .namespace
        .unwrap_or_else(|| config.defaults.namespace.clone());

    if let Some(parent) = args.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(&args.path, starter_spec(&name, &namespace))
        .with_cli_context(|| format!("Failed to write '{}'", args.path.display()))?;
    info!(path = %args.path.display(), "Starter spec written");

    output.success(&format!("Spec written to {}", args.path.display()))?;
    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  $EDITOR {}", args.path.display()))?;
        output.print(&format!("  bootforge generate {}", args.path.display()))?;
    }
    Ok(())
}

/// Project name from the current directory, or `demo`.
fn default_name(spec_path: &Path) -> String {
    std::path::absolute(spec_path)
        .ok()
        .and_then(|p| p.parent().and_then(|d| d.file_name()).map(|n| n.to_string_lossy().into_owned()))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "demo".into())
}
