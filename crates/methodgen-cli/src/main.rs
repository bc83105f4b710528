//! `methodgen`: turns a method signature into code through a directory of
//! `[[PLACEHOLDER]]` templates.
//!
//! Exit status is `0` on success, `2` for bad input (including clap parse
//! errors and a cancelled prompt), `3` when a template or directory is
//! missing, `4` for configuration problems and `1` for I/O failures.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // A .env file may carry METHODGEN_* overrides.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version also arrive as errors, printed to stdout.
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }
    let verbose = cli.global.verbose > 0;
    debug!(command = ?cli.command, "starting");

    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return report(err, verbose);
        }
    };
    let output = OutputManager::new(&cli.global, &config);

    match run(cli.command, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(err) => report(err, verbose),
    }
}

#[instrument(skip_all)]
fn run(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::New(args) => commands::new::execute(args, config, output),
        Commands::Inspect(args) => commands::inspect::execute(args, output),
        Commands::Templates(args) => commands::templates::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(args) => commands::config::execute(args, config, output),
    }
}

fn report(err: CliError, verbose: bool) -> ExitCode {
    err.log();
    if err.is_reported() {
        let text = if std::io::stderr().is_terminal() {
            err.format_colored(verbose)
        } else {
            err.format_plain(verbose)
        };
        eprint!("{text}");
    }
    ExitCode::from(err.exit_code())
}
