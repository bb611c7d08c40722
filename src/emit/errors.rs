//! Define error types for table emission.
//!
//! These errors represent *rendering* failures (as opposed to lexicon or allocation errors). The Ada target renders
//! plain text and cannot fail; the Rust target builds a syntax tree and reports configured paths or generated names it
//! cannot parse.

use thiserror::Error;

/// Error during table emission.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("syn parse error: {0}")]
    SynParse(String),

    #[error("invalid path `{path}` for {field}: {message}")]
    InvalidPath {
        field: &'static str,
        path: String,
        message: String,
    },

    #[error("`{0}` is not a valid identifier in the target grammar")]
    InvalidIdentifier(String),
}
