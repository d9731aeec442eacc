//! Implementation of the `bootforge generate` command.
//!
//! Responsibility: merge the spec file, flags and config defaults into one
//! `ProjectSpec`, run the engine, and write or list the result.  No
//! generation logic lives here.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indicatif::HumanBytes;
use serde::Serialize;
use tracing::{debug, info, instrument};

use bootforge_adapters::{LocalFilesystem, SpecLoader, spec_loader::SpecFile};
use bootforge_core::{
    application::{Generation, ProjectWriter, WriteReport},
    domain::{GenerationMode, ProjectSpec, Warning},
};

use crate::{
    cli::GenerateArgs,
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `bootforge generate` command.
///
/// Dispatch sequence:
/// 1. Build the spec from file, flags and config defaults
/// 2. Run the engine and show its warnings
/// 3. Early-exit with a file listing if `--dry-run`
/// 4. Resolve an existing target directory (`--force` or prompt)
/// 5. Write the project and print next steps
#[instrument(skip_all, fields(spec = ?args.spec, template = ?args.template))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Spec
    let spec = build_spec(&args, &config)?;
    debug!(project = %spec.name(), mode = spec.mode().name(), "Spec resolved");

    // 2. Engine
    let service = super::generation_service()?;
    let generation = service.generate(&spec)?;
    info!(
        project = %generation.spec.name(),
        files = generation.file_set.len(),
        warnings = generation.warnings.len(),
        "Generation finished"
    );

    let parent = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_dir().to_path_buf());
    let root = parent.join(generation.spec.artifact_id());

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return show_plan(&generation, &root, &output);
    }

    // 4. Existing directory
    let writer = ProjectWriter::new(Box::new(LocalFilesystem::new()));
    let overwrite = resolve_overwrite(&writer, &root, &args, &output)?;

    // 5. Write
    if !output.is_json() {
        show_summary(&generation, &root, &output)?;
    }
    let spinner = output.spinner(format!("Writing {} files...", generation.file_set.len()));
    let result = writer.write(&generation.file_set, &root, overwrite);
    spinner.finish_and_clear();
    let report = result?;

    if output.is_json() {
        return Ok(output.json(&Summary::new(&generation, &root, false))?);
    }
    super::print_warnings(&generation.warnings, &output)?;
    show_report(&generation, &report, &output)
}

// ── Spec construction ─────────────────────────────────────────────────────────

/// Merge order per key: flag, then spec file, then config default.
fn build_spec(args: &GenerateArgs, config: &AppConfig) -> CliResult<ProjectSpec> {
    let file = spec_file(args, config)?;
    Ok(file.into_spec()?)
}

fn spec_file(args: &GenerateArgs, config: &AppConfig) -> CliResult<SpecFile> {
    let mut file = match (&args.spec, &args.template) {
        (Some(path), _) => SpecLoader::new().read(path)?,
        (None, Some(template)) => SpecFile {
            name: template.clone(),
            ..SpecFile::default()
        },
        (None, None) => return Err(CliError::NothingToGenerate),
    };

    if let Some(template) = &args.template {
        if !file.apis.is_empty() {
            debug!(apis = file.apis.len(), "--template replaces the spec's APIs");
            file.apis.clear();
        }
        file.template = Some(template.clone());
    }
    if let Some(name) = &args.name {
        file.name = name.clone();
    }

    if let Some(namespace) = &args.namespace {
        file.namespace = Some(namespace.clone());
    }
    if let Some(java) = &args.java {
        file.runtime_version = Some(java.clone());
    }
    if let Some(boot) = &args.boot {
        file.framework_version = Some(boot.clone());
    }
    if let Some(database) = &args.database {
        file.database = Some(database.clone());
    }
    apply_defaults(&mut file, &config.defaults);

    Ok(file)
}

/// Fill keys the spec file left unset from the config defaults.
pub(crate) fn apply_defaults(file: &mut SpecFile, defaults: &Defaults) {
    file.namespace
        .get_or_insert_with(|| defaults.namespace.clone());
    file.runtime_version
        .get_or_insert_with(|| defaults.runtime_version.clone());
    file.framework_version
        .get_or_insert_with(|| defaults.framework_version.clone());
    if file.database.is_none() {
        file.database = defaults.database.clone();
    }
}

// ── Overwrite handling ────────────────────────────────────────────────────────

fn resolve_overwrite(
    writer: &ProjectWriter,
    root: &Path,
    args: &GenerateArgs,
    output: &OutputManager,
) -> CliResult<bool> {
    if !writer.exists(root) {
        return Ok(false);
    }
    if args.force {
        return Ok(true);
    }
    if args.yes || !cfg!(feature = "interactive") || !output.is_interactive() {
        return Err(CliError::ProjectExists {
            path: root.to_path_buf(),
        });
    }
    if confirm(&format!("'{}' already exists. Replace it?", root.display()))? {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_prompt: &str) -> CliResult<bool> {
    Ok(false)
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Summary<'a> {
    project: &'a str,
    root: &'a Path,
    dry_run: bool,
    generated_at: DateTime<Utc>,
    mode: &'static str,
    template: Option<&'a str>,
    database_profile: Option<&'a str>,
    storage: String,
    runtime_version: &'a str,
    framework_version: &'a str,
    bytes: usize,
    files: Vec<FileEntry<'a>>,
    warnings: &'a [Warning],
}

#[derive(Debug, Serialize)]
struct FileEntry<'a> {
    path: &'a str,
    kind: String,
    origin: &'a str,
    bytes: usize,
}

impl<'a> Summary<'a> {
    fn new(generation: &'a Generation, root: &'a Path, dry_run: bool) -> Self {
        Self {
            project: generation.spec.name(),
            root,
            dry_run,
            generated_at: Utc::now(),
            mode: generation.spec.mode().name(),
            template: generation.template.as_deref(),
            database_profile: generation.database_profile.as_deref(),
            storage: generation.storage.to_string(),
            runtime_version: generation.spec.runtime_version(),
            framework_version: generation.spec.framework_version(),
            bytes: generation.file_set.total_bytes(),
            files: generation
                .file_set
                .files()
                .map(|f| FileEntry {
                    path: &f.path,
                    kind: f.kind.to_string(),
                    origin: &f.origin,
                    bytes: f.size(),
                })
                .collect(),
            warnings: &generation.warnings,
        }
    }
}

fn show_summary(generation: &Generation, root: &Path, out: &OutputManager) -> CliResult<()> {
    let spec = &generation.spec;
    out.header(&format!("Generating '{}'", spec.name()))?;
    match spec.mode() {
        GenerationMode::Template { .. } => {
            let template = generation.template.as_deref().unwrap_or("-");
            out.field("Template", template, 12)?;
        }
        GenerationMode::Custom { apis, .. } => {
            out.field("APIs", &apis.len().to_string(), 12)?;
        }
    }
    out.field("Package", &spec.base_package(), 12)?;
    out.field("Java", spec.runtime_version(), 12)?;
    out.field("Spring Boot", spec.framework_version(), 12)?;
    out.field("Storage", generation.storage.as_str(), 12)?;
    if let Some(profile) = &generation.database_profile {
        out.field("Database", profile, 12)?;
    }
    out.field("Location", &root.display().to_string(), 12)?;
    out.print("")?;
    Ok(())
}

fn show_plan(generation: &Generation, root: &Path, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        return Ok(out.json(&Summary::new(generation, root, true))?);
    }

    show_summary(generation, root, out)?;
    super::print_warnings(&generation.warnings, out)?;
    out.info(&format!(
        "Dry run: would write {} files ({}) to {}",
        generation.file_set.len(),
        HumanBytes(generation.file_set.total_bytes() as u64),
        root.display(),
    ))?;
    for file in generation.file_set.files() {
        let size = HumanBytes(file.size() as u64).to_string();
        out.print(&format!("  {size:>10}  {}", file.path))?;
    }
    Ok(())
}

fn show_report(generation: &Generation, report: &WriteReport, out: &OutputManager) -> CliResult<()> {
    if report.replaced {
        out.warning(&format!("Replaced existing {}", report.root.display()))?;
    }
    out.success(&format!(
        "Project '{}' generated: {} files, {}",
        generation.spec.name(),
        report.files,
        HumanBytes(report.bytes as u64),
    ))?;
    if out.is_verbose() {
        for file in generation.file_set.files() {
            out.detail(&format!("  {}", file.path))?;
        }
    }

    if !out.is_quiet() {
        out.print("")?;
        out.print("Next steps:")?;
        out.print(&format!("  cd {}", display_root(&report.root)))?;
        out.print("  mvn spring-boot:run")?;
    }
    Ok(())
}

fn display_root(root: &Path) -> String {
    root.strip_prefix(".")
        .map(PathBuf::from)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            spec: None,
            template: None,
            database: None,
            name: None,
            namespace: None,
            java: None,
            boot: None,
            output: None,
            dry_run: false,
            force: false,
            yes: false,
        }
    }

    fn spec_on_disk(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn nothing_to_generate_without_spec_or_template() {
        let result = build_spec(&args(), &AppConfig::default());
        assert!(matches!(result, Err(CliError::NothingToGenerate)));
    }

    #[test]
    fn template_alone_names_the_project_after_it() {
        let spec = build_spec(
            &GenerateArgs {
                template: Some("uber".into()),
                ..args()
            },
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(spec.name(), "uber");
        assert_eq!(spec.artifact_id(), "uber");
        assert!(matches!(spec.mode(), GenerationMode::Template { template_id, .. } if template_id == "uber"));
    }

    #[test]
    fn flags_beat_the_file_and_the_file_beats_config() {
        let file = spec_on_disk(
            "name = \"Shop\"\nnamespace = \"com.shop\"\nruntime-version = \"11\"\n[[apis]]\nname = \"Products\"\n",
        );
        let mut config = AppConfig::default();
        config.defaults.namespace = "org.config".into();
        config.defaults.framework_version = "3.2.5".into();

        let spec = build_spec(
            &GenerateArgs {
                spec: Some(file.path().to_path_buf()),
                java: Some("21".into()),
                ..args()
            },
            &config,
        )
        .unwrap();

        assert_eq!(spec.runtime_version(), "21");
        assert_eq!(spec.namespace(), "com.shop");
        assert_eq!(spec.framework_version(), "3.2.5");
        assert_eq!(spec.mode().name(), "custom");
    }

    #[test]
    fn template_flag_replaces_spec_apis() {
        let file = spec_on_disk("name = \"Shop\"\n[[apis]]\nname = \"Products\"\n");
        let spec = build_spec(
            &GenerateArgs {
                spec: Some(file.path().to_path_buf()),
                template: Some("zomato".into()),
                database: Some("postgresql".into()),
                ..args()
            },
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(spec.name(), "Shop");
        assert_eq!(
            spec.mode(),
            &GenerationMode::Template {
                template_id: "zomato".into(),
                database_profile: Some("postgresql".into()),
            }
        );
    }

    #[test]
    fn config_database_applies_when_nothing_else_names_one() {
        let mut config = AppConfig::default();
        config.defaults.database = Some("mysql".into());
        let spec = build_spec(
            &GenerateArgs {
                template: Some("github".into()),
                ..args()
            },
            &config,
        )
        .unwrap();
        assert_eq!(spec.mode().database_profile(), Some("mysql"));
    }

    #[test]
    fn invalid_spec_values_are_core_errors() {
        let file = spec_on_disk("name = \"Shop\"\nserver-port = 80\n");
        let result = build_spec(
            &GenerateArgs {
                spec: Some(file.path().to_path_buf()),
                ..args()
            },
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(CliError::Core(_))));
    }

    #[test]
    fn display_root_drops_the_dot_prefix() {
        assert_eq!(display_root(Path::new("./shop")), "shop");
        assert_eq!(display_root(Path::new("/tmp/shop")), "/tmp/shop");
    }
}
