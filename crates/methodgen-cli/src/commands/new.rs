//! Implementation of the `methodgen new` command.
//!
//! Responsibility: translate CLI arguments into settings and an editor
//! context, call the core method service, and display results. No business
//! logic lives here.

use tracing::{debug, info, instrument};

use methodgen_adapters::{FileBufferEditor, LocalFilesystem};
use methodgen_core::{
    application::{METHOD_TEMPLATE_OFFSET, MethodService},
    domain::{CursorPosition, EditorContext, GeneratorSettings, NamedReturnStyle},
};

use crate::{
    cli::NewArgs,
    commands::settings_with_location,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

/// Execute the `methodgen new` command.
///
/// 1. Resolve settings (config + flags) and the editor context
/// 2. Take the signature from `--signature` or the prompt
/// 3. `--dry-run`: print what would be written and stop
/// 4. Insert at the cursor unless `--no-insert`
/// 5. Append to every target file
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = resolve_settings(&args, &config);
    let editor = editor_context(&args);
    debug!(
        templates = settings.template_names.len(),
        method_template = settings.method_template.as_deref().unwrap_or("none"),
        style = %settings.named_return_style,
        "Settings resolved"
    );

    let signature = match args.signature {
        Some(signature) => signature,
        None => prompt::ask_signature()?,
    };

    let service = MethodService::new(
        settings,
        Box::new(LocalFilesystem::new()),
        Box::new(FileBufferEditor::new(LocalFilesystem::new())),
    );

    if args.dry_run {
        return dry_run(&service, &editor, &signature, args.no_insert, &output);
    }

    if !args.no_insert {
        service.add_to_current_location(&editor, &signature)?;
        if let Some(file) = editor.current_file() {
            output.success(&format!("Inserted into {}", file.display()))?;
        }
    }

    service.create_methods(&editor, &signature)?;
    let directory = editor.current_directory().unwrap_or_default();
    for name in &service.settings().template_names {
        output.success(&format!("Appended to {}", directory.join(name).display()))?;
    }

    info!(files = service.settings().template_names.len(), "Method generated");
    if service.settings().template_names.is_empty() && !output.is_quiet() {
        output.info("No template_names configured; only the current file was edited")?;
    }

    Ok(())
}

fn dry_run(
    service: &MethodService,
    editor: &EditorContext,
    signature: &str,
    no_insert: bool,
    output: &OutputManager,
) -> CliResult<()> {
    if !no_insert {
        if let Some(file) = editor.current_file() {
            output.header(&format!(
                "{} (line {})",
                file.display(),
                editor.cursor.line + 1
            ))?;
            output.code(signature)?;

            if let Some(body) = service.render_method_template(signature)? {
                output.header(&format!(
                    "{} (line {})",
                    file.display(),
                    editor.cursor.lines_below(METHOD_TEMPLATE_OFFSET).line + 1
                ))?;
                output.code(&body)?;
            }
        }
    }

    for rendered in service.preview(editor, signature)? {
        output.header(&format!("{} (appended)", rendered.target.display()))?;
        output.code(&rendered.content)?;
    }

    output.info("Dry run: no files were written")?;
    Ok(())
}

/// Config values overridden by flags.
fn resolve_settings(args: &NewArgs, config: &AppConfig) -> GeneratorSettings {
    let mut settings = settings_with_location(config, &args.location);
    if let Some(names) = &args.templates {
        settings = settings.with_template_names(names);
    }
    if let Some(method_template) = &args.method_template {
        settings = settings.with_method_template(method_template.clone());
    }
    if args.disambiguate_returns {
        settings = settings.with_named_return_style(NamedReturnStyle::Disambiguated);
    }
    settings
}

/// Flags use 1-based positions; the core uses 0-based ones.
fn editor_context(args: &NewArgs) -> EditorContext {
    match &args.file {
        Some(file) => EditorContext::new(
            file.clone(),
            CursorPosition::new(
                args.line.saturating_sub(1) as usize,
                args.column.saturating_sub(1) as usize,
            ),
        ),
        None => EditorContext::detached(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    fn new_args(argv: &[&str]) -> NewArgs {
        let cli = Cli::parse_from(["methodgen", "new"].iter().chain(argv));
        match cli.command {
            Commands::New(args) => args,
            _ => panic!("expected New command"),
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            root_directory: "/srv".into(),
            template_names: "a.go,b.go".into(),
            method_template: "method.tmpl".into(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn config_values_are_used_without_flags() {
        let settings = resolve_settings(&new_args(&[]), &config());
        assert_eq!(settings.root_directory, PathBuf::from("/srv"));
        assert_eq!(settings.template_names, vec!["a.go", "b.go"]);
        assert_eq!(settings.method_template.as_deref(), Some("method.tmpl"));
        assert_eq!(settings.named_return_style, NamedReturnStyle::FirstLetter);
    }

    #[test]
    fn flags_override_config() {
        let args = new_args(&[
            "--templates",
            "c.go",
            "--method-template",
            "",
            "--root",
            "/other",
            "--template-dir",
            "tpl",
            "--disambiguate-returns",
        ]);
        let settings = resolve_settings(&args, &config());
        assert_eq!(settings.template_names, vec!["c.go"]);
        assert_eq!(settings.method_template, None);
        assert_eq!(settings.template_dir(), PathBuf::from("/other/tpl"));
        assert_eq!(settings.named_return_style, NamedReturnStyle::Disambiguated);
    }

    #[test]
    fn cursor_flags_become_zero_based() {
        let ctx = editor_context(&new_args(&["--file", "svc.go", "--line", "4", "--column", "2"]));
        assert_eq!(ctx.current_file(), Some(PathBuf::from("svc.go").as_path()));
        assert_eq!(ctx.cursor, CursorPosition::new(3, 1));
    }

    #[test]
    fn missing_file_gives_detached_context() {
        let ctx = editor_context(&new_args(&[]));
        assert_eq!(ctx, EditorContext::detached());
    }
}
