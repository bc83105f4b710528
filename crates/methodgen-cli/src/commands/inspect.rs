//! `methodgen inspect`: show how a signature parses and expands.

use std::collections::BTreeMap;

use owo_colors::OwoColorize;
use serde::Serialize;

use methodgen_core::domain::{NamedReturnStyle, Placeholder, RenderContext, Signature};

use crate::{
    cli::{InspectArgs, OutputFormat, ReportFormat},
    error::CliResult,
    output::OutputManager,
};

/// Parsed signature plus every placeholder value.
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    signature: &'a Signature,
    placeholders: BTreeMap<&'static str, String>,
}

pub fn execute(args: InspectArgs, output: OutputManager) -> CliResult<()> {
    let style = if args.disambiguate_returns {
        NamedReturnStyle::Disambiguated
    } else {
        NamedReturnStyle::FirstLetter
    };
    let context = RenderContext::from_raw(&args.signature, style);
    let report = InspectReport {
        signature: context.signature(),
        placeholders: placeholder_values(&context),
    };

    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => ReportFormat::Json,
        _ => ReportFormat::Human,
    });

    match format {
        ReportFormat::Json => output.json(&report)?,
        ReportFormat::Human => print_human(&report, &output)?,
    }
    Ok(())
}

fn placeholder_values(context: &RenderContext) -> BTreeMap<&'static str, String> {
    Placeholder::FILE_TEMPLATE
        .into_iter()
        .chain([Placeholder::Replace])
        .filter_map(|p| context.value(p).map(|value| (p.token(), value)))
        .collect()
}

fn print_human(report: &InspectReport<'_>, output: &OutputManager) -> std::io::Result<()> {
    let sig = report.signature;
    output.header("Signature")?;
    output.print(&format!("  name        {}", sig.name()))?;
    for param in sig.parameters() {
        output.print(&format!(
            "  parameter   {} {}",
            param.name, param.declared_type
        ))?;
    }
    for ret in sig.returns() {
        output.print(&format!("  returns     {}", ret.declared_type))?;
    }
    if let Some(notation) = sig.notation() {
        output.print(&format!("  notation    {notation}"))?;
    }

    output.print("")?;
    output.header("Placeholders")?;
    let width = report.placeholders.keys().map(|k| k.len()).max().unwrap_or(0);
    for (token, value) in &report.placeholders {
        let value = if output.supports_color() {
            value.green().to_string()
        } else {
            value.clone()
        };
        output.print(&format!("  {token:<width$}  {value}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_placeholder_has_a_value() {
        let context = RenderContext::from_raw(
            "Foo(a string, b int) (int, error) `json:\"foo\"`",
            NamedReturnStyle::FirstLetter,
        );
        let values = placeholder_values(&context);

        assert_eq!(values.len(), 7);
        assert_eq!(values["METHODNAME"], "Foo");
        assert_eq!(values["PARAMETERS"], "a, b");
        assert_eq!(values["LOGGINGID"], "a");
        assert_eq!(values["NAMEDRETURN"], "(i int, e error)");
        assert_eq!(values["METHODSIGNATURE"], "Foo(a string, b int) (int, error)");
        assert_eq!(values["METHODSIGNATUREWITHOUTRETURN"], "Foo(a string, b int)");
    }

    #[test]
    fn report_serialises_signature_and_values() {
        let context = RenderContext::from_raw("Ping()", NamedReturnStyle::FirstLetter);
        let report = InspectReport {
            signature: context.signature(),
            placeholders: placeholder_values(&context),
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["signature"]["name"], "Ping");
        assert_eq!(json["placeholders"]["LOGGINGID"], "\"undefined\"");
        assert_eq!(json["placeholders"]["NAMEDRETURN"], "");
    }
}
