//! `bootforge databases`: browse the database profiles.

use bootforge_core::application::ProfileInfo;

use crate::{cli::DatabasesCommands, error::CliResult, output::OutputManager};

pub fn execute(cmd: DatabasesCommands, output: OutputManager) -> CliResult<()> {
    let service = super::catalog_service()?;
    match cmd {
        DatabasesCommands::List => {
            let profiles = service.list_database_profiles();
            if output.is_json() {
                return Ok(output.json(&profiles)?);
            }
            output.header(&format!("Database Profiles ({})", profiles.len()))?;
            output.print("")?;
            for info in &profiles {
                output.print(&list_line(info))?;
                output.detail(&format!(
                    "      {} | {}",
                    info.use_case,
                    info.features.join(", ")
                ))?;
            }
            output.print("")?;
            output.info("Use: bootforge generate <spec> --database <id>")?;
        }
    }
    Ok(())
}

fn list_line(info: &ProfileInfo) -> String {
    let style = if info.relational { "SQL" } else { "NoSQL" };
    let marker = if info.is_default { " (default)" } else { "" };
    format!("  {:<12} {:<16} {style:<6} {}{marker}", info.id, info.name, info.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_line_shows_style_and_default() {
        let info = ProfileInfo {
            id: "h2".into(),
            name: "H2 Database".into(),
            description: "Lightweight in-memory database for development".into(),
            features: vec!["In-Memory".into()],
            use_case: "Development & Testing".into(),
            relational: true,
            is_default: true,
        };
        let line = list_line(&info);
        assert!(line.contains("SQL"));
        assert!(line.ends_with("(default)"));

        let mongo = ProfileInfo {
            relational: false,
            is_default: false,
            ..info
        };
        assert!(list_line(&mongo).contains("NoSQL"));
    }
}
