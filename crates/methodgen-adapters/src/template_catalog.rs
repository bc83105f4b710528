//! Template directory listing.
//!
//! Walks the configured template directory (one level deep) and reports
//! which templates exist and which placeholders each one uses.
//!
//! # Directory layout expected
//!
//! ```text
//! ~/template/
//! ├── service.go.tmpl         ← file template for target "service.go"
//! ├── instrumenting.go.tmpl   ← file template for target "instrumenting.go"
//! └── method.tmpl             ← cursor template (any name, set in config)
//! ```

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use methodgen_core::{
    application::ApplicationError,
    domain::{MethodTemplate, Placeholder, TEMPLATE_EXTENSION},
    error::MethodgenResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// One template found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Target file name for `.tmpl` files, full file name otherwise.
    pub name: String,
    pub path: PathBuf,
    /// `true` for `<target>.tmpl` files.
    pub is_file_template: bool,
    pub placeholders: BTreeSet<Placeholder>,
}

/// Reads the template directory.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
}

impl TemplateCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All regular files in the template directory, sorted by name.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn list(&self) -> MethodgenResult<Vec<TemplateEntry>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::TemplateNotFound {
                path: self.root.clone(),
            }
            .into());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path().to_path_buf();
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable template");
                    continue;
                }
            };

            let file_name = entry.file_name().to_string_lossy().into_owned();
            let (name, is_file_template) = match strip_template_extension(&file_name) {
                Some(target) => (target.to_string(), true),
                None => (file_name, false),
            };

            let placeholders = MethodTemplate::new(&path, content).placeholders();
            debug!(name = %name, placeholders = placeholders.len(), "Template found");

            entries.push(TemplateEntry {
                name,
                path,
                is_file_template,
                placeholders,
            });
        }

        Ok(entries)
    }
}

fn strip_template_extension(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(TEMPLATE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|target| !target.is_empty())
}
