//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `BOOTFORGE_DEFAULTS__NAMESPACE=com.acme`
//! 3. The `--config` file, or `config.toml` in the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use bootforge_core::domain::entities::project_spec::{
    DEFAULT_FRAMEWORK_VERSION, DEFAULT_NAMESPACE, DEFAULT_RUNTIME_VERSION,
};

/// Prefix of environment overrides; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "BOOTFORGE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generated projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Used when neither the spec file nor a flag sets a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub namespace: String,
    pub runtime_version: String,
    pub framework_version: String,
    /// Database profile for specs that need persistence but name none.
    pub database: Option<String>,
    /// Parent directory for generated projects.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                namespace: DEFAULT_NAMESPACE.into(),
                runtime_version: DEFAULT_RUNTIME_VERSION.into(),
                framework_version: DEFAULT_FRAMEWORK_VERSION.into(),
                database: None,
                output_dir: PathBuf::from("."),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  The
    /// default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__");
        Self::load_from(file, env)
    }

    fn load_from(
        file: impl config::Source + Send + Sync + 'static,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(env)
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.bootforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bootforge", "bootforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".bootforge.toml"))
    }

    /// Serialize as the TOML written by `config init` and `config show`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Directory new projects are written under unless `--output` is given.
    pub fn output_dir(&self) -> &Path {
        &self.defaults.output_dir
    }
}
