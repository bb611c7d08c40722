//! Error taxonomy for the dictionary compiler.
//!
//! Every error is fatal for the invocation: the pipeline derives the full entry sequence before anything is written,
//! so a failure never leaves partial output behind.
//!
//! ## Notes
//!
//! - Table-length mismatches against the external word enumeration are not detected here. The generated tables are
//!   typed by the enumeration, so the downstream build rejects them.

use miette::Diagnostic;
use thiserror::Error;

pub use crate::emit::EmitError;

/// Why a raw lexicon token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordReason {
    Empty,
    /// A character outside `[a-z]` after ASCII case folding.
    NonAlphabetic(char),
}

impl std::fmt::Display for InvalidWordReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidWordReason::Empty => write!(f, "word is empty"),
            InvalidWordReason::NonAlphabetic(ch) => write!(f, "character {ch:?} is not a letter a-z"),
        }
    }
}

/// Error raised by the normalize, allocate and emit stages.
#[derive(Debug, Error, Diagnostic)]
pub enum DictError {
    #[error("invalid word {word:?} at position {index}: {reason}")]
    #[diagnostic(
        code(speech_dict::invalid_word),
        help("lexicon entries must be non-empty lowercase ASCII words; spell contractions without the apostrophe")
    )]
    InvalidWord {
        index: usize,
        word: String,
        reason: InvalidWordReason,
    },

    #[error("generated symbol `{symbol}` is claimed by both {first} and {second}")]
    #[diagnostic(
        code(speech_dict::identifier_collision),
        help("edit the word list or the reserved-word table so every generated symbol is unique")
    )]
    IdentifierCollision {
        symbol: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    #[diagnostic(code(speech_dict::emit))]
    Emit(#[from] EmitError),
}

impl DictError {
    pub(crate) fn invalid_word(index: usize, word: &str, reason: InvalidWordReason) -> Self {
        DictError::InvalidWord {
            index,
            word: word.to_string(),
            reason,
        }
    }

    pub(crate) fn collision(symbol: impl Into<String>, first: impl Into<String>, second: impl Into<String>) -> Self {
        DictError::IdentifierCollision {
            symbol: symbol.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}
