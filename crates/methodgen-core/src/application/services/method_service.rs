//! Method Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Insert the signature and method template at the cursor
//! 2. Render every configured file template
//! 3. Append each rendered template to its target file
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Editor, FileStore},
    },
    domain::{
        DomainValidator as validator, EditorContext, GeneratorSettings, MethodTemplate,
        RenderContext, TextEdit, merge,
    },
    error::MethodgenResult,
};

/// Lines between the cursor and the inserted method template.
pub const METHOD_TEMPLATE_OFFSET: usize = 2;

/// A rendered template and the target it would be appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: String,
    pub target: PathBuf,
    pub content: String,
}

/// Main generation service.
pub struct MethodService {
    settings: GeneratorSettings,
    store: Box<dyn FileStore>,
    editor: Box<dyn Editor>,
}

impl MethodService {
    /// Create a new method service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use methodgen_core::application::MethodService;
    ///
    /// let service = MethodService::new(
    ///     settings,   // GeneratorSettings
    ///     store,      // impl FileStore
    ///     editor,     // impl Editor
    /// );
    /// ```
    pub fn new(
        settings: GeneratorSettings,
        store: Box<dyn FileStore>,
        editor: Box<dyn Editor>,
    ) -> Self {
        Self {
            settings,
            store,
            editor,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Full pipeline: cursor insertion, then file generation.
    ///
    /// Returns one completion token (the raw signature) per template name.
    #[instrument(skip_all, fields(signature = %raw))]
    pub fn generate(&self, editor: &EditorContext, raw: &str) -> MethodgenResult<Vec<String>> {
        let raw = self.add_to_current_location(editor, raw)?;
        self.create_methods(editor, &raw)
    }

    /// Insert the signature at the cursor and the method template two lines
    /// below it. Echoes `raw`.
    #[instrument(skip_all, fields(signature = %raw))]
    pub fn add_to_current_location(
        &self,
        editor: &EditorContext,
        raw: &str,
    ) -> MethodgenResult<String> {
        validator::validate_signature(raw)?;
        validator::validate_settings(&self.settings)?;
        let file = editor.current_file().ok_or(ApplicationError::NoActiveTarget)?;

        let mut edits = vec![TextEdit::insert(editor.cursor, raw)];
        if let Some(body) = self.render_method_template(raw)? {
            edits.push(TextEdit::insert(
                editor.cursor.lines_below(METHOD_TEMPLATE_OFFSET),
                body,
            ));
        }

        debug!(file = %file.display(), edits = edits.len(), "Inserting at cursor");
        self.editor.insert(file, &edits)?;

        Ok(raw.to_string())
    }

    /// Generate into every configured target file.
    ///
    /// Files are processed in parallel; results keep configuration order and
    /// the failure of the earliest configured file is returned.
    #[instrument(skip_all, fields(signature = %raw))]
    pub fn create_methods(
        &self,
        editor: &EditorContext,
        raw: &str,
    ) -> MethodgenResult<Vec<String>> {
        validator::validate_signature(raw)?;
        validator::validate_settings(&self.settings)?;
        let directory = editor
            .current_directory()
            .ok_or(ApplicationError::NoActiveTarget)?;
        let context = self.render_context(raw);

        let outcomes: Vec<MethodgenResult<String>> = self
            .settings
            .template_names
            .par_iter()
            .map(|file_name| self.merge_into_target(&context, &directory, file_name))
            .collect();
        let tokens = outcomes.into_iter().collect::<MethodgenResult<Vec<_>>>()?;

        info!(files = tokens.len(), "Methods created");
        Ok(tokens)
    }

    /// Generate into a single target file next to the current file.
    pub fn create_method(
        &self,
        editor: &EditorContext,
        file_name: &str,
        raw: &str,
    ) -> MethodgenResult<String> {
        validator::validate_signature(raw)?;
        let directory = editor
            .current_directory()
            .ok_or(ApplicationError::NoActiveTarget)?;
        self.merge_into_target(&self.render_context(raw), &directory, file_name)
    }

    /// Render every configured template without touching any target.
    pub fn preview(
        &self,
        editor: &EditorContext,
        raw: &str,
    ) -> MethodgenResult<Vec<RenderedFile>> {
        validator::validate_signature(raw)?;
        validator::validate_settings(&self.settings)?;
        let directory = editor
            .current_directory()
            .ok_or(ApplicationError::NoActiveTarget)?;
        let context = self.render_context(raw);

        self.settings
            .template_names
            .iter()
            .map(|file_name| {
                Ok(RenderedFile {
                    file_name: file_name.clone(),
                    target: directory.join(file_name),
                    content: self.render_file_template(&context, file_name)?,
                })
            })
            .collect()
    }

    /// The method template rendered for `raw`, or `None` when no method
    /// template is configured.
    pub fn render_method_template(&self, raw: &str) -> MethodgenResult<Option<String>> {
        validator::validate_settings(&self.settings)?;
        let Some(path) = self.settings.method_template_path() else {
            return Ok(None);
        };
        let template = self.load_template(&path)?;
        Ok(Some(
            self.render_context(raw)
                .render_method_template(template.content()),
        ))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render_context(&self, raw: &str) -> RenderContext {
        RenderContext::from_raw(raw, self.settings.named_return_style)
    }

    fn render_file_template(
        &self,
        context: &RenderContext,
        file_name: &str,
    ) -> MethodgenResult<String> {
        let template = self.load_template(&self.settings.template_path(file_name))?;
        Ok(context.render(template.content()))
    }

    /// Render, append to the target, write back.
    fn merge_into_target(
        &self,
        context: &RenderContext,
        directory: &Path,
        file_name: &str,
    ) -> MethodgenResult<String> {
        let rendered = self.render_file_template(context, file_name)?;

        let target = directory.join(file_name);
        let existing = self.store.read_to_string(&target)?;
        self.store.write(&target, &merge(&existing, &rendered))?;

        debug!(target = %target.display(), "Template merged");
        Ok(context.signature().raw().to_string())
    }

    /// Templates are read fresh on every call.
    fn load_template(&self, path: &Path) -> MethodgenResult<MethodTemplate> {
        if !self.store.exists(path) {
            return Err(ApplicationError::TemplateNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let content = self.store.read_to_string(path)?;
        Ok(MethodTemplate::new(path, content))
    }
}
