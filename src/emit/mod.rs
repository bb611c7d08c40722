//! Emit the dictionary tables as source text.
//!
//! This module defines the [`Target`] seam and wires together the output grammars. Every target renders the same
//! contract:
//! - one import per namespace, in namespace-key order;
//! - a `Data` table of references to the vocabulary's audio-parameter records, in lexicon order;
//! - an `Image` table of display spellings, in the same order;
//! - both tables indexed by the external word enumeration, so their length is checked against its cardinality by the
//!   downstream build.
//!
//! ## Notes
//! - Rendering is a pure function of the [`Dictionary`]: no clock, no hash iteration, byte-identical across runs.
//!
//! ## See also
//! - [`ada`]: the embedded runtime's grammar (used by the CLI)
//! - [`rust`]: syntax-tree based Rust rendering
//! - [`writer`]: indentation-aware text builder

pub mod ada;
mod config;
mod errors;
pub mod rust;
mod writer;

pub use ada::AdaTarget;
pub use config::{AdaConfig, RustConfig};
pub use errors::EmitError;
pub use rust::RustTarget;
pub use writer::SourceWriter;

use speech_vocab::grammar::ReservedWords;

use crate::allocator::Dictionary;

/// First-line notice carried by every generated file.
pub const GENERATED_NOTICE: &str = "Generated by speech-dict. Do not edit by hand.";

/// An output grammar.
pub trait Target {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Keywords generated symbols must avoid.
    fn reserved(&self) -> &'static ReservedWords;

    /// Render the full generated source for `dictionary`.
    fn render(&self, dictionary: &Dictionary) -> Result<String, EmitError>;
}

/// Render `dictionary` with `target`.
#[tracing::instrument(skip_all, fields(grammar = target.name(), entries = dictionary.len()))]
pub fn emit(dictionary: &Dictionary, target: &dyn Target) -> Result<String, EmitError> {
    let text = target.render(dictionary)?;
    tracing::debug!(bytes = text.len(), "rendered tables");
    Ok(text)
}
