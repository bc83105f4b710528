//! Derivation rules.
//!
//! Pure functions computing the secondary values a template can ask for.
//! Each rule is evaluated only when its placeholder occurs in the template
//! (see [`RenderContext`](super::template::RenderContext)).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::signature::{Signature, split_notation};

/// Logging identifier used when the signature has no parameters.
pub const UNDEFINED_LOGGING_ID: &str = "\"undefined\"";

/// How named-return bindings are synthesised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedReturnStyle {
    /// First letter of each type. Two types sharing a first letter produce
    /// duplicate bindings.
    #[default]
    FirstLetter,
    /// First letter, with repeats numbered from 2: `(i int, i2 interface{})`.
    Disambiguated,
}

impl NamedReturnStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstLetter => "first-letter",
            Self::Disambiguated => "disambiguated",
        }
    }
}

impl fmt::Display for NamedReturnStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamedReturnStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-letter" | "first_letter" | "firstletter" => Ok(Self::FirstLetter),
            "disambiguated" | "disambiguate" => Ok(Self::Disambiguated),
            other => Err(format!(
                "unknown named return style '{other}' (expected 'first-letter' or 'disambiguated')"
            )),
        }
    }
}

/// Raw signature up to the first backtick, trimmed.
pub fn signature_without_notation(raw: &str) -> String {
    split_notation(raw).0.to_string()
}

pub fn method_name(signature: &Signature) -> String {
    signature.name().to_string()
}

/// Parameter names joined with `", "`.
pub fn parameter_names(signature: &Signature) -> String {
    signature
        .parameters()
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Name and parameter list, without the return clause.
///
/// Cuts after the first `)` that follows the first `(`. Without such a `)`
/// the notation-stripped signature is returned as is.
pub fn signature_without_return(raw: &str) -> String {
    let structural = split_notation(raw).0;
    let close = structural
        .find('(')
        .and_then(|open| structural[open..].find(')').map(|close| open + close));

    match close {
        Some(close) => structural[..=close].trim().to_string(),
        None => structural.to_string(),
    }
}

/// Parenthesised named-return clause, e.g. `(i int, e error)`.
///
/// Empty when the signature declares no return types.
pub fn named_return(signature: &Signature, style: NamedReturnStyle) -> String {
    if signature.returns().is_empty() {
        return String::new();
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let bindings = signature
        .returns()
        .iter()
        .map(|ret| {
            let base = ret.binding_name();
            let binding = match style {
                NamedReturnStyle::FirstLetter => base,
                NamedReturnStyle::Disambiguated => {
                    let count = seen.entry(base.clone()).or_insert(0);
                    *count += 1;
                    if *count == 1 {
                        base
                    } else {
                        format!("{base}{count}")
                    }
                }
            };
            format!("{binding} {}", ret.declared_type)
        })
        .collect::<Vec<_>>();

    format!("({})", bindings.join(", "))
}

/// First parameter name, or [`UNDEFINED_LOGGING_ID`] when there is none.
pub fn logging_id(signature: &Signature) -> String {
    signature
        .parameters()
        .first()
        .map(|p| p.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNDEFINED_LOGGING_ID)
        .to_string()
}
