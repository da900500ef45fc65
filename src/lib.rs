//! Core library entry for the `secretgen` CLI.

pub mod adapters;
pub mod cli;
pub mod error;
pub mod logging;
pub mod ports;
pub mod secret;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::adapters::live::LiveIdGenerator;
use crate::error::SecretError;
use crate::ports::IdGenerator;
use crate::secret::{format_line, generate_secret, LABEL};

/// Run the CLI with the provided arguments, writing the result line to `out`.
///
/// # Errors
///
/// Returns [`SecretError::Usage`] when help or version output was requested,
/// and otherwise the errors of [`run_with`].
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<(), SecretError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: Write,
{
    let _cli = cli::Cli::try_parse_from(args)?;
    run_with(&LiveIdGenerator::new(), out)
}

/// Generate one secret from `id_gen` and write the labeled line to `out`.
///
/// Nothing is written if generation fails.
///
/// # Errors
///
/// Returns [`SecretError::GenerationUnavailable`] if `id_gen` fails, or
/// [`SecretError::Output`] if the line cannot be written.
pub fn run_with<W: Write>(id_gen: &dyn IdGenerator, out: &mut W) -> Result<(), SecretError> {
    let secret = generate_secret(id_gen)?;
    writeln!(out, "{}", format_line(LABEL, &secret))?;
    out.flush()?;
    Ok(())
}

/// Map the outcome of [`run`] to the process exit code.
///
/// Help and version output exit 0 as clap reports them; every other error exits 1.
#[must_use]
pub fn exit_code(result: &Result<(), SecretError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(SecretError::Usage(err)) => match err.exit_code() {
            0 => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        },
        Err(_) => ExitCode::FAILURE,
    }
}
