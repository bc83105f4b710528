//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod inspect;
pub mod new;
pub mod templates;

use methodgen_core::domain::GeneratorSettings;

use crate::{cli::TemplateLocationArgs, config::AppConfig};

/// Config-derived settings with `--root` / `--template-dir` applied.
pub(crate) fn settings_with_location(
    config: &AppConfig,
    location: &TemplateLocationArgs,
) -> GeneratorSettings {
    let mut settings = config.generator_settings();
    if let Some(root) = &location.root {
        settings.root_directory = root.clone();
    }
    if let Some(dir) = &location.template_dir {
        settings.template_directory = dir.clone();
    }
    settings
}
