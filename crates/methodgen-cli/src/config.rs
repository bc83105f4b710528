//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`GeneratorSettings`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables: `METHODGEN_TEMPLATE_NAMES`,
//!    `METHODGEN_OUTPUT__NO_COLOR`, ...
//! 3. `--config <FILE>` (must exist)
//! 4. `.methodgen.toml` in the current directory
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use tracing::debug;

use methodgen_core::domain::{GeneratorSettings, NamedReturnStyle};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "METHODGEN";

/// Per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".methodgen.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base directory for templates. A leading `~` is the home directory.
    pub root_directory: String,
    /// Template directory, relative to `root_directory`.
    pub template_directory: String,
    /// Comma-separated target file names.
    pub template_names: String,
    /// Template inserted below the cursor; empty to skip.
    pub method_template: String,
    pub named_return_style: NamedReturnStyle,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_directory: "~".into(),
            template_directory: "template".into(),
            template_names: String::new(),
            method_template: String::new(),
            named_return_style: NamedReturnStyle::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut files = vec![
            (Self::config_path(), false),
            (PathBuf::from(LOCAL_CONFIG_FILE), false),
        ];
        if let Some(path) = config_file {
            files.push((path.to_path_buf(), true));
        }
        Self::load_layers(&files, true)
    }

    fn load_layers(files: &[(PathBuf, bool)], with_env: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to serialise default config")?,
        );

        for (path, required) in files {
            debug!(path = %path.display(), required, "Config file layer");
            builder = builder.add_source(
                File::from(path.clone())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        if with_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.methodgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("dev", "methodgen", "methodgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// `root_directory` with `~` expanded.
    pub fn root_path(&self) -> PathBuf {
        expand_home(&self.root_directory)
    }

    /// Core settings described by this configuration.
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings::new(self.root_path(), &self.template_directory)
            .with_template_names(&self.template_names)
            .with_method_template(self.method_template.clone())
            .with_named_return_style(self.named_return_style)
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(path),
    };

    match BaseDirs::new() {
        Some(dirs) => {
            let rest = rest.trim_start_matches(['/', '\\']);
            if rest.is_empty() {
                dirs.home_dir().to_path_buf()
            } else {
                dirs.home_dir().join(rest)
            }
        }
        None => PathBuf::from(path),
    }
}
