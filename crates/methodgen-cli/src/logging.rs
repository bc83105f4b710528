//! Diagnostics go to stderr through `tracing`; stdout stays reserved for
//! generated code and reports.
//!
//! `-v`/`-vv`/`-vvv` raise the level from `warn` to `info`/`debug`/`trace`,
//! `--quiet` drops it to `error`, and a set `RUST_LOG` replaces the whole
//! filter.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const CRATE_TARGETS: [&str; 3] = ["methodgen", "methodgen_core", "methodgen_adapters"];

/// Installs the process-wide subscriber. Call once, first thing in `main`.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(directives(derive_level(args))),
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn directives(level: &str) -> String {
    CRATE_TARGETS
        .map(|target| format!("{target}={level}"))
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
