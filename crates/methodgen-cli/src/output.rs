//! Terminal output for command results.
//!
//! Status lines carry a one-glyph marker (`✓ ✗ ⚠ ℹ`) that is coloured unless
//! `--no-color`, `NO_COLOR` or `output.no_color` is set. Anything a user
//! might pipe into a file (rendered code, JSON) bypasses `--quiet`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Failure,
    Caution,
    Note,
}

impl Tone {
    fn glyph(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}",
            Tone::Failure => "\u{2717}",
            Tone::Caution => "\u{26a0}",
            Tone::Note => "\u{2139}",
        }
    }

    fn colour(self) -> AnsiColors {
        match self {
            Tone::Success => AnsiColors::Green,
            Tone::Failure => AnsiColors::Red,
            Tone::Caution => AnsiColors::Yellow,
            Tone::Note => AnsiColors::Blue,
        }
    }
}

/// Writes everything a command reports to stdout.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn marked(&self, tone: Tone, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("{} {msg}", tone.glyph())
        } else {
            let colour = tone.colour();
            format!("{} {}", tone.glyph().color(colour).bold(), msg.color(colour))
        };
        self.term.write_line(&line)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.marked(Tone::Success, msg)
    }

    /// Shown even with `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Failure, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.marked(Tone::Caution, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.marked(Tone::Note, msg)
    }

    /// Section title, e.g. the file name above a dry-run preview.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_line(text)
        } else {
            self.term.write_line(&text.cyan().bold().to_string())
        }
    }

    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Rendered template text, written as-is with a trailing newline ensured.
    pub fn code(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn flags(quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        OutputManager::new(&flags(quiet, no_color), &AppConfig::default())
    }

    #[test]
    fn quiet_still_accepts_writes() {
        let out = manager(true, true);
        assert!(out.is_quiet());
        assert!(out.print("hidden").is_ok());
        assert!(out.success("hidden").is_ok());
    }

    #[test]
    fn explicit_format_is_kept() {
        let mut args = flags(false, false);
        args.output_format = OutputFormat::Json;
        assert_eq!(OutputManager::new(&args, &AppConfig::default()).format(), OutputFormat::Json);
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = manager(false, false);
        let no_color = manager(false, true);
        assert!(colored.supports_color());
        assert!(!no_color.supports_color());
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&flags(false, false), &config).supports_color());
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = manager(false, false);
        assert_eq!(out.format(), OutputFormat::Plain);
    }
}
