//! Templates and rendering.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  MethodTemplate                                              │
//! │  ├── path     (where it was loaded from, for diagnostics)    │
//! │  └── content  (raw text with [[TOKEN]] placeholders)         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  RenderContext                                               │
//! │  └── Placeholder ──> lazy derivation over the Signature      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! A template may use any subset of the placeholders. Derivations whose
//! placeholder is absent are never evaluated.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::derivation::{self, NamedReturnStyle};
use super::placeholder::{Placeholder, substitute};
use super::signature::{NOTATION_DELIMITER, Signature};

/// Separator placed between existing target content and generated content.
pub const MERGE_SEPARATOR: &str = "\n";

/// A template loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTemplate {
    path: PathBuf,
    content: String,
}

impl MethodTemplate {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Placeholders this template actually uses.
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        Placeholder::FILE_TEMPLATE
            .into_iter()
            .chain(std::iter::once(Placeholder::Replace))
            .filter(|p| p.is_present_in(&self.content))
            .collect()
    }
}

type Derivation = Box<dyn Fn(&Signature) -> String + Send + Sync>;

/// Placeholder → derivation table bound to one parsed signature.
///
/// Immutable once built; shared by reference across per-file render tasks.
pub struct RenderContext {
    signature: Signature,
    rules: Vec<(Placeholder, Derivation)>,
}

impl RenderContext {
    /// Build the standard rule table for file templates.
    ///
    /// | Placeholder                      | Value                          |
    /// |----------------------------------|--------------------------------|
    /// | `METHODSIGNATURE`                | signature, notation stripped   |
    /// | `METHODNAME`                     | name                           |
    /// | `PARAMETERS`                     | `a, b`                         |
    /// | `LOGGINGID`                      | first parameter or `"undefined"` |
    /// | `METHODSIGNATUREWITHOUTRETURN`   | `Foo(a string)`                |
    /// | `NAMEDRETURN`                    | `(i int, e error)`             |
    pub fn new(signature: Signature, style: NamedReturnStyle) -> Self {
        let rules = vec![
            rule(Placeholder::MethodSignature, |sig| {
                derivation::signature_without_notation(sig.raw())
            }),
            rule(Placeholder::MethodName, derivation::method_name),
            rule(Placeholder::Parameters, derivation::parameter_names),
            rule(Placeholder::LoggingId, derivation::logging_id),
            rule(Placeholder::MethodSignatureWithoutReturn, |sig| {
                derivation::signature_without_return(sig.raw())
            }),
            rule(Placeholder::NamedReturn, move |sig| {
                derivation::named_return(sig, style)
            }),
        ];

        Self { signature, rules }
    }

    /// Convenience constructor parsing `raw` first.
    pub fn from_raw(raw: &str, style: NamedReturnStyle) -> Self {
        Self::new(Signature::parse(raw), style)
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Value of a single placeholder, whether or not a template uses it.
    pub fn value(&self, placeholder: Placeholder) -> Option<String> {
        if placeholder == Placeholder::Replace {
            return Some(replace_value(self.signature.raw()).to_string());
        }
        self.rules
            .iter()
            .find(|(p, _)| *p == placeholder)
            .map(|(_, rule)| rule(&self.signature))
    }

    /// Substitute every placeholder present in `template`.
    pub fn render(&self, template: &str) -> String {
        self.rules
            .iter()
            .fold(template.to_string(), |text, (placeholder, rule)| {
                if !placeholder.is_present_in(&text) {
                    return text;
                }
                trace!(placeholder = %placeholder, "applying derivation");
                substitute(&text, &rule(&self.signature), placeholder.token())
            })
    }

    /// Render the cursor-insertion template: only `[[REPLACE]]` is filled.
    pub fn render_method_template(&self, template: &str) -> String {
        substitute(
            template,
            replace_value(self.signature.raw()),
            Placeholder::Replace.token(),
        )
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("signature", &self.signature)
            .field(
                "placeholders",
                &self.rules.iter().map(|(p, _)| *p).collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn rule<F>(placeholder: Placeholder, derive: F) -> (Placeholder, Derivation)
where
    F: Fn(&Signature) -> String + Send + Sync + 'static,
{
    (placeholder, Box::new(derive))
}

/// Value bound to `[[REPLACE]]`: everything before the first backtick,
/// whitespace preserved.
fn replace_value(raw: &str) -> &str {
    raw.split(NOTATION_DELIMITER).next().unwrap_or_default()
}

/// Append-only merge of generated content onto existing content.
pub fn merge(existing: &str, rendered: &str) -> String {
    let mut merged = String::with_capacity(existing.len() + MERGE_SEPARATOR.len() + rendered.len());
    merged.push_str(existing);
    merged.push_str(MERGE_SEPARATOR);
    merged.push_str(rendered);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(raw: &str) -> RenderContext {
        RenderContext::from_raw(raw, NamedReturnStyle::FirstLetter)
    }

    #[test]
    fn renders_end_to_end_example() {
        let rendered = ctx("Bar(x string) error")
            .render("func [[METHODSIGNATURE]] { [[LOGGINGID]] }");
        assert_eq!(rendered, "func Bar(x string) error { x }");
        assert_eq!(
            merge("package foo", &rendered),
            "package foo\nfunc Bar(x string) error { x }"
        );
    }

    #[test]
    fn template_without_placeholders_is_untouched() {
        let template = "// nothing to see here\n";
        assert_eq!(ctx("Foo(a string)").render(template), template);
    }

    #[test]
    fn renders_every_file_placeholder() {
        let template = "\
[[METHODSIGNATURE]]
[[METHODNAME]]
[[PARAMETERS]]
[[LOGGINGID]]
[[METHODSIGNATUREWITHOUTRETURN]]
[[NAMEDRETURN]]";
        let rendered = ctx("Get(id string, opts Options) (*User, error) `cache`").render(template);
        assert_eq!(
            rendered,
            "\
Get(id string, opts Options) (*User, error)
Get
id, opts
id
Get(id string, opts Options)
(u *User, e error)"
        );
    }

    #[test]
    fn replace_is_left_alone_by_file_rendering() {
        assert_eq!(ctx("Foo()").render("[[REPLACE]]"), "[[REPLACE]]");
    }

    #[test]
    fn method_template_fills_replace_only() {
        let out = ctx("Foo(a int) `x`").render_method_template("// [[REPLACE]] [[METHODNAME]]");
        assert_eq!(out, "// Foo(a int)  [[METHODNAME]]");
    }

    #[test]
    fn value_lookup() {
        let c = ctx("Foo(a int) error");
        assert_eq!(c.value(Placeholder::NamedReturn).as_deref(), Some("(e error)"));
        assert_eq!(c.value(Placeholder::Replace).as_deref(), Some("Foo(a int) error"));
    }

    #[test]
    fn placeholders_reports_used_tokens() {
        let template = MethodTemplate::new("a.tmpl", "[[METHODNAME]] [[NAMEDRETURN]] [[METHODNAME]]");
        let used: Vec<_> = template.placeholders().into_iter().collect();
        assert_eq!(used, vec![Placeholder::MethodName, Placeholder::NamedReturn]);
    }

    #[test]
    fn merge_appends_after_newline() {
        assert_eq!(merge("", "x"), "\nx");
        assert_eq!(merge("a\n", "x"), "a\n\nx");
    }
}
