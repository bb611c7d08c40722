//! Static data for the speech dictionary compiler.
//!
//! This crate is intentionally small and dependency-free. It holds the two literal inputs of the compiler:
//! - the raw lexicon source ([`words::SPEECH_WORDS`]), and
//! - the reserved-word tables of the supported output grammars ([`grammar`]).
//!
//! ## Notes
//!
//! - This is a pure data crate: **no IO**, no global state, and no compiler types.
//! - Tables are `const` so lookups never rebuild a list at call time.

pub mod grammar;
pub mod words;
