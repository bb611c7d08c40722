#![forbid(unsafe_code)]
//! Speech dictionary compiler
//!
//! Compiles a curated word list into two index-aligned constant tables for an embedded speech-synthesis runtime:
//! `Data` (one audio-parameter record reference per word) and `Image` (one display spelling per word). Both tables
//! are indexed by an external word enumeration whose values follow the canonical word order produced here.
//!
//! ## Pipeline
//!
//! ```text
//! raw words → lexicon::normalize → allocator::allocate → emit::emit → source text
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod allocator;
pub mod cli;
pub mod compiler;
pub mod emit;
pub mod errors;
pub mod lexicon;
pub mod version;

pub use allocator::{Dictionary, DictionaryEntry, allocate};
pub use compiler::{build_dictionary, compile};
pub use emit::{AdaTarget, RustTarget, Target};
pub use errors::DictError;
pub use lexicon::{Lexicon, Word, normalize};
