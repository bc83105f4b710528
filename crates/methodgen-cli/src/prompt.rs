//! Signature prompt.
//!
//! On a terminal the user is asked with `dialoguer`; when stdin is piped the
//! first line is read instead. A blank answer, end of input, or Ctrl-C all
//! end the run as [`CliError::Cancelled`].

use std::io::{self, BufRead, IsTerminal};

use tracing::debug;

use crate::error::{CliError, CliResult, IntoCli};

/// Ask for a method signature.
pub fn ask_signature() -> CliResult<String> {
    let answer = if io::stdin().is_terminal() {
        ask_interactively()?
    } else {
        read_first_line(io::stdin().lock())?
    };
    accept(answer)
}

#[cfg(feature = "interactive")]
fn ask_interactively() -> CliResult<String> {
    let result = dialoguer::Input::<String>::new()
        .with_prompt("What is the new method signature?")
        .allow_empty(true)
        .interact_text();

    match result {
        Ok(answer) => Ok(answer),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            Err(CliError::Cancelled)
        }
        Err(dialoguer::Error::IO(e)) => Err(e).with_cli_context(|| "Failed to read signature"),
        #[allow(unreachable_patterns)]
        Err(e) => Err(CliError::InvalidInput {
            message: "Failed to read signature".into(),
            source: Some(Box::new(e)),
        }),
    }
}

#[cfg(not(feature = "interactive"))]
fn ask_interactively() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

fn read_first_line(mut reader: impl BufRead) -> CliResult<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .with_cli_context(|| "Failed to read signature from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Blank answers dismiss the prompt.
fn accept(answer: String) -> CliResult<String> {
    if answer.trim().is_empty() {
        debug!("Empty signature, cancelling");
        return Err(CliError::Cancelled);
    }
    Ok(answer)
}
