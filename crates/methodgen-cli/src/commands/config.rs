//! `methodgen config`: show the merged configuration.

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

type Getter = fn(&AppConfig) -> String;

const KEYS: &[(&str, Getter)] = &[
    ("root_directory", |c| c.root_directory.clone()),
    ("template_directory", |c| c.template_directory.clone()),
    ("template_names", |c| c.template_names.clone()),
    ("method_template", |c| c.method_template.clone()),
    ("named_return_style", |c| c.named_return_style.to_string()),
    ("output.no_color", |c| c.output.no_color.to_string()),
];

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => output.print(&lookup(&config, &key)?)?,
        ConfigCommands::List => {
            let toml = toml::to_string_pretty(&config)
                .with_cli_context(|| "Failed to serialise config")?;
            output.header("Current Configuration:")?;
            output.print(toml.trim_end())?;
            output.print(&format!(
                "# root_directory resolves to {}",
                config.root_path().display()
            ))?;
        }
        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
            output.info(&format!(
                "{LOCAL_CONFIG_FILE} in the current directory is read after it"
            ))?;
        }
    }
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    KEYS.iter()
        .find(|(name, _)| *name == key)
        .map(|(_, get)| get(config))
        .ok_or_else(|| {
            let known: Vec<_> = KEYS.iter().map(|(name, _)| *name).collect();
            CliError::ConfigError {
                message: format!("Unknown config key '{key}' (known: {})", known.join(", ")),
                source: None,
            }
        })
}
