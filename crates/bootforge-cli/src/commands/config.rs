//! `bootforge config`: inspect and create the configuration file.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = explicit.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Show => {
            if output.is_json() {
                return Ok(output.json(&config)?);
            }
            output.header("Current Configuration:")?;
            output.print(&serialise(&config)?)?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
                return Ok(());
            }

            let toml = serialise(&AppConfig::default())?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }
            std::fs::write(&path, toml)
                .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

fn serialise(config: &AppConfig) -> CliResult<String> {
    config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialised_defaults_name_every_section() {
        let text = serialise(&AppConfig::default()).unwrap();
        assert!(text.contains("[defaults]"));
        assert!(text.contains("namespace = \"com.example\""));
        assert!(text.contains("[output]"));
    }
}
