//! Signature parsing.
//!
//! Turns a free-form, user-typed method signature into a [`Signature`]:
//!
//! ```text
//! Foo(a string, b int) (int, error) `json:"foo"`
//! └┬┘ └──────┬───────┘ └─────┬────┘ └─────┬─────┘
//! name   parameters       returns      notation
//! ```
//!
//! Parsing is total: malformed input never fails, it degrades into empty
//! fields. There is no attempt to validate the signature against any
//! language grammar.

use serde::Serialize;

/// Delimiter that starts the trailing notation (struct tag, comment marker).
pub const NOTATION_DELIMITER: char = '`';

/// A parsed method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    raw: String,
    name: String,
    parameters: Vec<Parameter>,
    returns: Vec<ReturnType>,
    notation: Option<String>,
}

/// One entry of the parameter list.
///
/// An empty segment (e.g. the inside of `()`) is kept as a parameter with an
/// empty name so that positional derivations still see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub declared_type: String,
}

/// One entry of the return clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnType {
    pub declared_type: String,
}

impl Signature {
    /// Parse a raw signature. Never fails.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (structural, notation) = split_notation(&raw);

        let Some(open) = structural.find('(') else {
            return Self {
                name: structural.to_string(),
                parameters: Vec::new(),
                returns: Vec::new(),
                notation,
                raw,
            };
        };

        let name = structural[..open].trim().to_string();
        let after_open = &structural[open + 1..];

        let (inner, rest) = match after_open.find(')') {
            Some(close) => (&after_open[..close], &after_open[close + 1..]),
            None => (after_open, ""),
        };

        Self {
            name,
            parameters: parse_parameters(inner),
            returns: parse_returns(rest),
            notation,
            raw,
        }
    }

    /// The exact input, notation included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn returns(&self) -> &[ReturnType] {
        &self.returns
    }

    /// Text after the first backtick, trimmed. `None` when there is no
    /// backtick or nothing follows it.
    pub fn notation(&self) -> Option<&str> {
        self.notation.as_deref()
    }
}

impl ReturnType {
    pub fn new(declared_type: impl Into<String>) -> Self {
        Self {
            declared_type: declared_type.into(),
        }
    }

    /// Single lowercase character used as the named-return binding.
    ///
    /// Taken from the type with the leading `*` removed. Empty when the type
    /// is empty or only a `*`.
    pub fn binding_name(&self) -> String {
        self.declared_type
            .trim_start_matches('*')
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split `raw` into the trimmed structural part and the optional notation.
pub(crate) fn split_notation(raw: &str) -> (&str, Option<String>) {
    match raw.split_once(NOTATION_DELIMITER) {
        Some((head, tail)) => {
            let tail = tail.trim();
            let notation = (!tail.is_empty()).then(|| tail.to_string());
            (head.trim(), notation)
        }
        None => (raw.trim(), None),
    }
}

fn parse_parameters(inner: &str) -> Vec<Parameter> {
    inner
        .split(',')
        .map(|segment| {
            let mut tokens = segment.split_whitespace();
            let name = tokens.next().unwrap_or_default().to_string();
            let declared_type = tokens.collect::<Vec<_>>().join(" ");
            Parameter {
                name,
                declared_type,
            }
        })
        .collect()
}

fn parse_returns(rest: &str) -> Vec<ReturnType> {
    let clause = rest.trim();
    let clause = match clause.strip_prefix('(') {
        Some(wrapped) => wrapped.split(')').next().unwrap_or_default(),
        None => clause,
    };

    clause
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ReturnType::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_signature() {
        let sig = Signature::parse("Foo(a string, b int) (int, error)");

        assert_eq!(sig.name(), "Foo");
        assert_eq!(
            sig.parameters(),
            &[Parameter::new("a", "string"), Parameter::new("b", "int")]
        );
        assert_eq!(
            sig.returns(),
            &[ReturnType::new("int"), ReturnType::new("error")]
        );
        assert_eq!(sig.notation(), None);
    }

    #[test]
    fn single_unwrapped_return() {
        let sig = Signature::parse("Save(w *Widget) error");
        assert_eq!(sig.returns(), &[ReturnType::new("error")]);
        assert_eq!(sig.parameters()[0].declared_type, "*Widget");
    }

    #[test]
    fn no_parenthesis_means_name_only() {
        let sig = Signature::parse("  Close  ");
        assert_eq!(sig.name(), "Close");
        assert!(sig.parameters().is_empty());
        assert!(sig.returns().is_empty());
    }

    #[test]
    fn empty_parameter_list_keeps_one_empty_entry() {
        let sig = Signature::parse("Foo()");
        assert_eq!(sig.parameters(), &[Parameter::new("", "")]);
        assert!(sig.returns().is_empty());
    }

    #[test]
    fn multi_token_types_are_rejoined() {
        let sig = Signature::parse("Run(ctx context.Context, fn func() error)");
        assert_eq!(sig.parameters()[0], Parameter::new("ctx", "context.Context"));
        // the first ')' closes the parameter list; the rest is best-effort
        assert_eq!(sig.parameters()[1], Parameter::new("fn", "func("));
    }

    #[test]
    fn notation_is_captured_and_excluded_from_structure() {
        let sig = Signature::parse("Foo(a string) error `json:\"a\"`");
        assert_eq!(sig.notation(), Some("json:\"a\"`"));
        assert_eq!(sig.returns(), &[ReturnType::new("error")]);
        assert_eq!(sig.raw(), "Foo(a string) error `json:\"a\"`");
    }

    #[test]
    fn unclosed_parameter_list_degrades() {
        let sig = Signature::parse("Foo(a string");
        assert_eq!(sig.name(), "Foo");
        assert_eq!(sig.parameters(), &[Parameter::new("a", "string")]);
        assert!(sig.returns().is_empty());
    }

    #[test]
    fn binding_name_strips_pointer_and_lowercases() {
        assert_eq!(ReturnType::new("*Widget").binding_name(), "w");
        assert_eq!(ReturnType::new("Error").binding_name(), "e");
        assert_eq!(ReturnType::new("*").binding_name(), "");
    }
}
