//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::Write;

use speech_vocab::words::SPEECH_WORDS;

use super::{CliError, CliResult, ExitCode};
use crate::compiler;
use crate::emit::AdaTarget;
use crate::errors::DictError;

/// Compile the built-in lexicon for the Ada target and write it to `out`.
///
/// The text is written in one call after the whole pipeline succeeded.
pub fn emit_builtin_dictionary(out: &mut impl Write) -> CliResult<ExitCode> {
    let text = compiler::compile(SPEECH_WORDS, &AdaTarget::default()).map_err(report)?;
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| CliError::failure(format!("Error writing generated source: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

/// Render a pipeline error with its diagnostic code and help.
fn report(err: DictError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}
