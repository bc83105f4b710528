//! Placeholder tokens and substitution.
//!
//! A placeholder is an identifier wrapped in `[[` and `]]`. Matching is
//! literal and case-sensitive; every occurrence is replaced.

use std::fmt;

use serde::Serialize;

pub const OPEN: &str = "[[";
pub const CLOSE: &str = "]]";

/// Every token methodgen knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Placeholder {
    /// Signature with the notation stripped.
    MethodSignature,
    MethodName,
    /// Parameter names, comma separated.
    Parameters,
    MethodSignatureWithoutReturn,
    NamedReturn,
    LoggingId,
    /// Cursor-insertion template only.
    Replace,
}

impl Placeholder {
    /// Placeholders recognised in per-file templates, in application order.
    pub const FILE_TEMPLATE: [Placeholder; 6] = [
        Self::MethodSignature,
        Self::MethodName,
        Self::Parameters,
        Self::LoggingId,
        Self::MethodSignatureWithoutReturn,
        Self::NamedReturn,
    ];

    /// The bare identifier.
    pub const fn token(self) -> &'static str {
        match self {
            Self::MethodSignature => "METHODSIGNATURE",
            Self::MethodName => "METHODNAME",
            Self::Parameters => "PARAMETERS",
            Self::MethodSignatureWithoutReturn => "METHODSIGNATUREWITHOUTRETURN",
            Self::NamedReturn => "NAMEDRETURN",
            Self::LoggingId => "LOGGINGID",
            Self::Replace => "REPLACE",
        }
    }

    /// The token as it appears in template text, e.g. `[[METHODNAME]]`.
    pub fn bracketed(self) -> String {
        bracket(self.token())
    }

    /// `true` if `template` contains this placeholder.
    pub fn is_present_in(self, template: &str) -> bool {
        template.contains(&self.bracketed())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

fn bracket(token: &str) -> String {
    format!("{OPEN}{token}{CLOSE}")
}

/// Replace every `[[token]]` in `template` with `value`.
///
/// Returns `template` unchanged when the bracketed token does not occur.
pub fn substitute(template: &str, value: &str, token: &str) -> String {
    let needle = bracket(token);
    if !template.contains(&needle) {
        return template.to_string();
    }
    template.replace(&needle, value)
}
