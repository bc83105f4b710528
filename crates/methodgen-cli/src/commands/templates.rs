//! `methodgen templates`: list the template directory.

use std::path::PathBuf;

use serde::Serialize;

use methodgen_adapters::{TemplateCatalog, TemplateEntry};
use methodgen_core::domain::GeneratorSettings;

use crate::{
    cli::{OutputFormat, TemplatesArgs},
    commands::settings_with_location,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct TemplateRow {
    name: String,
    path: PathBuf,
    kind: &'static str,
    configured: bool,
    placeholders: Vec<&'static str>,
}

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = settings_with_location(&config, &args.location);
    let catalog = TemplateCatalog::new(settings.template_dir());
    let rows: Vec<TemplateRow> = catalog
        .list()?
        .into_iter()
        .map(|entry| row(entry, &settings))
        .collect();

    if output.format() == OutputFormat::Json {
        output.json(&rows)?;
        return Ok(());
    }

    output.header(&format!("Templates in {}", catalog.root().display()))?;
    if rows.is_empty() {
        output.info("No templates found")?;
    }
    for row in &rows {
        let marker = if row.configured { "*" } else { " " };
        output.print(&format!("{marker} {:<24} {}", row.name, row.kind))?;
        if args.placeholders && !row.placeholders.is_empty() {
            output.print(&format!("    {}", row.placeholders.join(", ")))?;
        }
    }

    for missing in missing_templates(&settings, &rows) {
        output.error(&format!("Configured but missing: {missing}"))?;
    }

    Ok(())
}

fn row(entry: TemplateEntry, settings: &GeneratorSettings) -> TemplateRow {
    let file_name = entry.path.file_name().and_then(|n| n.to_str());
    let is_method_template =
        file_name.is_some() && file_name == settings.method_template.as_deref();
    let kind = match (is_method_template, entry.is_file_template) {
        (true, _) => "method",
        (false, true) => "file",
        (false, false) => "other",
    };
    let configured = is_method_template
        || (entry.is_file_template && settings.template_names.contains(&entry.name));

    TemplateRow {
        kind,
        configured,
        placeholders: entry.placeholders.iter().map(|p| p.token()).collect(),
        name: entry.name,
        path: entry.path,
    }
}

/// Configured template files that are not on disk.
fn missing_templates(settings: &GeneratorSettings, rows: &[TemplateRow]) -> Vec<String> {
    let present = |path: &PathBuf| rows.iter().any(|r| &r.path == path);

    settings
        .template_names
        .iter()
        .map(|name| settings.template_path(name))
        .chain(settings.method_template_path())
        .filter(|path| !present(path))
        .map(|path| path.display().to_string())
        .collect()
}
