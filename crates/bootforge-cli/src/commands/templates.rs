//! `bootforge templates`: browse the reference applications.

use bootforge_core::{application::TemplateInfo, domain::TemplateEntry};

use crate::{cli::TemplatesCommands, error::CliResult, output::OutputManager};

pub fn execute(cmd: TemplatesCommands, output: OutputManager) -> CliResult<()> {
    let service = super::catalog_service()?;
    match cmd {
        TemplatesCommands::List => {
            let templates = service.list_templates();
            if output.is_json() {
                return Ok(output.json(&templates)?);
            }
            output.header(&format!("Available Templates ({})", templates.len()))?;
            output.print("")?;
            for info in &templates {
                output.print(&list_line(info))?;
                output.detail(&format!("      {}", info.description))?;
            }
            output.print("")?;
            output.info("Use: bootforge generate --template <id>")?;
        }

        TemplatesCommands::Show { id } => {
            let info = service.describe_template(&id)?;
            if output.is_json() {
                return Ok(output.json(&info)?);
            }
            let entry = service.template(&id)?;
            show_template(&info, entry, &output)?;
        }
    }
    Ok(())
}

fn list_line(info: &TemplateInfo) -> String {
    let marker = if info.is_default { " (fallback)" } else { "" };
    format!(
        "  {:<12} {} - {} entities, {} APIs{marker}",
        info.id,
        info.name,
        info.entities.len(),
        info.apis.len()
    )
}

fn show_template(info: &TemplateInfo, entry: &TemplateEntry, out: &OutputManager) -> CliResult<()> {
    out.header(&format!("{} ({})", info.name, info.id))?;
    out.detail(&info.description)?;
    out.print("")?;

    out.print("Entities:")?;
    for entity in &entry.entities {
        let fields: Vec<&str> = entity.fields.iter().map(|f| f.name.as_str()).collect();
        out.print(&format!("  {:<16} {}", entity.name, fields.join(", ")))?;
        for rel in &entity.relationships {
            out.detail(&format!(
                "  {:<16} {} {} -> {}",
                "",
                rel.cardinality,
                rel.name.as_deref().unwrap_or(""),
                rel.target
            ))?;
        }
    }

    if !info.enumerations.is_empty() {
        out.print("")?;
        out.print(&format!("Enumerations: {}", info.enumerations.join(", ")))?;
    }

    out.print("")?;
    out.print("APIs:")?;
    for api in &entry.apis {
        out.print(&format!("  {} [{}] -> {}", api.name, api.purpose, api.entity))?;
        for endpoint in &api.endpoints {
            out.detail(&format!("      {} {}", endpoint.verb, endpoint.path))?;
        }
    }
    Ok(())
}
