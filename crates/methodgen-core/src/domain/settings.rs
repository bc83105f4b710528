//! Generator settings and editor context.
//!
//! Both are passed explicitly into the service; nothing here reads the
//! environment. Home-directory expansion happens before settings are built.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::derivation::NamedReturnStyle;

/// Extension appended to a template name to find its template file.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Directory holding `template_directory`. Already expanded.
    pub root_directory: PathBuf,
    /// Template directory, relative to `root_directory`.
    pub template_directory: PathBuf,
    /// Target file names; each has a `<name>.tmpl` template.
    pub template_names: Vec<String>,
    /// Template inserted below the cursor, if any.
    pub method_template: Option<String>,
    #[serde(default)]
    pub named_return_style: NamedReturnStyle,
}

impl GeneratorSettings {
    pub fn new(root_directory: impl Into<PathBuf>, template_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            template_directory: template_directory.into(),
            template_names: Vec::new(),
            method_template: None,
            named_return_style: NamedReturnStyle::default(),
        }
    }

    /// Set template names from the comma-separated configuration value.
    pub fn with_template_names(mut self, names: &str) -> Self {
        self.template_names = split_template_names(names);
        self
    }

    /// Set the method template; an empty name clears it.
    pub fn with_method_template(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.method_template = (!name.trim().is_empty()).then(|| name.trim().to_string());
        self
    }

    pub fn with_named_return_style(mut self, style: NamedReturnStyle) -> Self {
        self.named_return_style = style;
        self
    }

    /// `<root>/<template_dir>`
    pub fn template_dir(&self) -> PathBuf {
        self.root_directory.join(&self.template_directory)
    }

    /// `<root>/<template_dir>/<name>.tmpl`
    pub fn template_path(&self, file_name: &str) -> PathBuf {
        self.template_dir()
            .join(format!("{file_name}.{TEMPLATE_EXTENSION}"))
    }

    /// `<root>/<template_dir>/<method_template>`
    pub fn method_template_path(&self) -> Option<PathBuf> {
        self.method_template
            .as_ref()
            .map(|name| self.template_dir().join(name))
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_template_names(names: &str) -> Vec<String> {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Zero-based cursor position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start of the line `lines` below this one.
    pub const fn lines_below(self, lines: usize) -> Self {
        Self {
            line: self.line + lines,
            column: 0,
        }
    }
}

/// Text to insert at a position of the buffer as it was before any edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub position: CursorPosition,
    pub text: String,
}

impl TextEdit {
    pub fn insert(position: CursorPosition, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// What the editor knows at invocation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContext {
    pub current_file: Option<PathBuf>,
    pub cursor: CursorPosition,
}

impl EditorContext {
    pub fn new(current_file: impl Into<PathBuf>, cursor: CursorPosition) -> Self {
        Self {
            current_file: Some(current_file.into()),
            cursor,
        }
    }

    /// Context without an open file.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Directory of the current file, where target files live.
    pub fn current_directory(&self) -> Option<PathBuf> {
        self.current_file().map(|file| {
            file.parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_names_are_split_and_trimmed() {
        assert_eq!(
            split_template_names("service.go, instrumenting.go,,logging.go "),
            vec!["service.go", "instrumenting.go", "logging.go"]
        );
        assert!(split_template_names("").is_empty());
    }

    #[test]
    fn paths_follow_naming_convention() {
        let settings = GeneratorSettings::new("/home/me", "template")
            .with_template_names("service.go")
            .with_method_template("method.tmpl");

        assert_eq!(
            settings.template_path("service.go"),
            PathBuf::from("/home/me/template/service.go.tmpl")
        );
        assert_eq!(
            settings.method_template_path(),
            Some(PathBuf::from("/home/me/template/method.tmpl"))
        );
    }

    #[test]
    fn blank_method_template_is_none() {
        let settings = GeneratorSettings::new("/r", "t").with_method_template("  ");
        assert_eq!(settings.method_template_path(), None);
    }

    #[test]
    fn current_directory_of_relative_file() {
        let ctx = EditorContext::new("main.go", CursorPosition::default());
        assert_eq!(ctx.current_directory(), Some(PathBuf::new()));
        assert_eq!(EditorContext::detached().current_directory(), None);
    }

    #[test]
    fn lines_below_resets_column() {
        assert_eq!(
            CursorPosition::new(4, 12).lines_below(2),
            CursorPosition::new(6, 0)
        );
    }
}
