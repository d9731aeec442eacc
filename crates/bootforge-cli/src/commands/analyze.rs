//! `bootforge analyze`: resolve and analyze a spec without rendering.

use tracing::instrument;

use bootforge_adapters::SpecLoader;
use bootforge_core::{application::Analysis, domain::AnalysisResult};

use crate::{
    cli::AnalyzeArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

#[instrument(skip_all, fields(spec = %args.spec.display()))]
pub fn execute(args: AnalyzeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut file = SpecLoader::new().read(&args.spec)?;
    super::generate::apply_defaults(&mut file, &config.defaults);
    let spec = file.into_spec()?;

    let analysis = super::generation_service()?.analyze(&spec)?;

    if output.is_json() {
        return Ok(output.json(&analysis)?);
    }
    show(&analysis, &output)?;
    super::print_warnings(&analysis.warnings, &output)
}

fn show(analysis: &Analysis, out: &OutputManager) -> CliResult<()> {
    let spec = &analysis.spec;
    out.header(&format!("Analysis of '{}'", spec.name()))?;
    out.field("Mode", spec.mode().name(), 12)?;
    if let Some(template) = &analysis.template {
        out.field("Template", template, 12)?;
    }
    out.field("Package", &spec.base_package(), 12)?;
    out.field("Java", spec.runtime_version(), 12)?;
    out.field("Spring Boot", spec.framework_version(), 12)?;
    out.field(
        "Imports",
        if analysis.resolution.jakarta { "jakarta.*" } else { "javax.*" },
        12,
    )?;
    out.field("Dependencies", &join_or_none(spec.dependencies()), 12)?;
    out.field("Storage", analysis.storage.as_str(), 12)?;
    if let Some(profile) = &analysis.database_profile {
        out.field("Database", profile, 12)?;
    }

    out.print("")?;
    out.print("Requirements:")?;
    for (label, on) in requirements(&analysis.project.result) {
        out.print(&format!("  [{}] {label}", if on { "x" } else { " " }))?;
    }

    out.print("")?;
    out.print(&format!("Entities ({}):", analysis.project.entities.len()))?;
    for entity in &analysis.project.entities {
        let apis: Vec<&str> = analysis
            .project
            .apis_for(&entity.name)
            .map(|a| a.name.as_str())
            .collect();
        out.print(&format!("  {:<16} {} fields", entity.name, entity.fields.len()))?;
        if !apis.is_empty() {
            out.detail(&format!("  {:<16} served by {}", "", apis.join(", ")))?;
        }
    }

    let relationships = &analysis.project.result.relationships;
    if !relationships.is_empty() {
        out.print("")?;
        out.print("Relationships:")?;
        for rel in relationships {
            out.print(&format!("  {} {} {}", rel.source, rel.cardinality, rel.target))?;
        }
    }
    Ok(())
}

fn requirements(result: &AnalysisResult) -> [(&'static str, bool); 5] {
    [
        ("persistence", result.needs_persistence),
        ("authentication", result.needs_authentication),
        ("validation", result.needs_validation),
        ("file upload", result.needs_file_upload),
        ("notifications", result.needs_notifications),
    ]
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".into()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_follow_the_result() {
        let result = AnalysisResult {
            needs_persistence: true,
            needs_authentication: true,
            ..AnalysisResult::default()
        };
        let on: Vec<&str> = requirements(&result)
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(label, _)| label)
            .collect();
        assert_eq!(on, ["persistence", "authentication"]);
    }

    #[test]
    fn empty_dependencies_read_none() {
        assert_eq!(join_or_none(&[]), "none");
        assert_eq!(join_or_none(&["web".into(), "jpa".into()]), "web, jpa");
    }
}
