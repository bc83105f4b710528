//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "methodgen",
    bin_name = "methodgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate method boilerplate from a signature",
    long_about = "methodgen turns one method signature into code: the signature and a \
                  method stub are inserted into the file you are editing, and every \
                  configured template is rendered and appended to its sibling file.",
    after_help = "EXAMPLES:\n\
        \x20 methodgen new -s 'GetUser(id string) (*User, error)' --file service.go --line 12\n\
        \x20 methodgen inspect 'Sum(a int, b int) (int, error)'\n\
        \x20 methodgen templates\n\
        \x20 methodgen completions bash > /usr/share/bash-completion/completions/methodgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert a method and append it to every configured target file.
    #[command(
        visible_alias = "n",
        about = "Generate a new method",
        after_help = "EXAMPLES:\n\
            \x20 methodgen new -s 'Ping() error' --file service.go --line 8\n\
            \x20 methodgen new --file service.go --templates endpoint.go,logging.go\n\
            \x20 methodgen new -s 'Ping() error' --file service.go --dry-run"
    )]
    New(NewArgs),

    /// Show how a signature is parsed and what each placeholder expands to.
    #[command(
        visible_alias = "i",
        about = "Inspect a signature",
        after_help = "EXAMPLES:\n\
            \x20 methodgen inspect 'Foo(a string, b int) (int, error)'\n\
            \x20 methodgen inspect 'Foo(a string)' --format json"
    )]
    Inspect(InspectArgs),

    /// List the templates in the template directory.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 methodgen templates\n\
            \x20 methodgen templates --root ~/work --template-dir templates"
    )]
    Templates(TemplatesArgs),

    /// Initialise a methodgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 methodgen init           # default location\n\
            \x20 methodgen init --local   # .methodgen.toml in CWD\n\
            \x20 methodgen init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 methodgen completions bash > ~/.local/share/bash-completion/completions/methodgen\n\
            \x20 methodgen completions zsh  > ~/.zfunc/_methodgen\n\
            \x20 methodgen completions fish > ~/.config/fish/completions/methodgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the methodgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 methodgen config get template_names\n\
            \x20 methodgen config list\n\
            \x20 methodgen config path"
    )]
    Config(ConfigCommands),
}

// ── shared overrides ──────────────────────────────────────────────────────────

/// Overrides for where templates are read from.
#[derive(Debug, Default, Args)]
pub struct TemplateLocationArgs {
    /// Root directory (defaults to `root_directory` from config).
    #[arg(long = "root", value_name = "DIR", help = "Root directory")]
    pub root: Option<PathBuf>,

    /// Template directory below the root.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory, relative to the root"
    )]
    pub template_dir: Option<PathBuf>,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `methodgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Method signature; prompted for when omitted.
    #[arg(
        short = 's',
        long = "signature",
        value_name = "SIGNATURE",
        help = "Method signature, e.g. 'Foo(a string) (int, error)'"
    )]
    pub signature: Option<String>,

    /// The file being edited. Target files are its siblings.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "File being edited"
    )]
    pub file: Option<PathBuf>,

    /// Cursor line (1-based).
    #[arg(
        short = 'l',
        long = "line",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Cursor line, 1-based"
    )]
    pub line: u32,

    /// Cursor column (1-based).
    #[arg(
        long = "column",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Cursor column, 1-based"
    )]
    pub column: u32,

    /// Comma-separated target file names.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "NAMES",
        help = "Comma-separated target file names (overrides config)"
    )]
    pub templates: Option<String>,

    /// Template inserted two lines below the cursor.
    #[arg(
        short = 'm',
        long = "method-template",
        value_name = "NAME",
        help = "Method template file name (overrides config)"
    )]
    pub method_template: Option<String>,

    #[command(flatten)]
    pub location: TemplateLocationArgs,

    /// Only append to target files; leave the current file alone.
    #[arg(long = "no-insert", help = "Do not edit the current file")]
    pub no_insert: bool,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Print rendered templates without writing")]
    pub dry_run: bool,

    /// Number repeated named-return bindings (`i`, `i2`).
    #[arg(
        long = "disambiguate-returns",
        help = "Number named-return bindings that share a first letter"
    )]
    pub disambiguate_returns: bool,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `methodgen inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Signature to parse.
    #[arg(value_name = "SIGNATURE", help = "Method signature to inspect")]
    pub signature: String,

    /// Output format; defaults to JSON when `--output-format json` is set.
    #[arg(long = "format", value_enum, help = "Report format")]
    pub format: Option<ReportFormat>,

    /// Number repeated named-return bindings.
    #[arg(long = "disambiguate-returns", help = "Use numbered named returns")]
    pub disambiguate_returns: bool,
}

/// Report format for `inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    Human,
    Json,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `methodgen templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[command(flatten)]
    pub location: TemplateLocationArgs,

    /// Show the placeholders each template uses.
    #[arg(short = 'p', long = "placeholders", help = "Show placeholders")]
    pub placeholders: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `methodgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.methodgen.toml` in the current directory.
    #[arg(long = "local", help = "Create a local config in the current directory")]
    pub local: bool,

    /// Overwrite an existing configuration file.
    #[arg(long = "force", help = "Overwrite existing config")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `methodgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `methodgen config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print a single configuration value.
    Get {
        /// Key, e.g. `template_names` or `output.no_color`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "methodgen",
            "new",
            "-s",
            "Foo(a string)",
            "--file",
            "service.go",
            "--line",
            "12",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.signature.as_deref(), Some("Foo(a string)"));
        assert_eq!(args.file, Some(PathBuf::from("service.go")));
        assert_eq!(args.line, 12);
        assert_eq!(args.column, 1);
        assert!(!args.dry_run);
    }

    #[test]
    fn line_zero_is_rejected() {
        let result = Cli::try_parse_from(["methodgen", "new", "--file", "a.go", "--line", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn inspect_format_parses() {
        let cli = Cli::parse_from(["methodgen", "inspect", "Foo()", "--format", "json"]);
        let Commands::Inspect(args) = cli.command else {
            panic!("expected Inspect command");
        };
        assert_eq!(args.format, Some(ReportFormat::Json));
    }

    #[test]
    fn templates_alias() {
        let cli = Cli::parse_from(["methodgen", "ls", "--root", "/tmp"]);
        assert!(matches!(cli.command, Commands::Templates(_)));
    }

    #[test]
    fn pwsh_alias() {
        let cli = Cli::parse_from(["methodgen", "completions", "pwsh"]);
        let Commands::Completions(args) = cli.command else {
            panic!("expected Completions command");
        };
        assert_eq!(args.shell, Shell::PowerShell);
    }

    #[test]
    fn no_color_flag_without_value() {
        let cli = Cli::try_parse_from(["methodgen", "--no-color", "templates"]).unwrap();
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["methodgen", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }
}
