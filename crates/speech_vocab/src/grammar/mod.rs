//! Reserved-word tables for the output grammars.
//!
//! A generated namespace or identifier must never spell a keyword of the grammar it is emitted in. Each grammar
//! exposes its keywords as a [`ReservedWords`] table: a sorted `const` slice searched with a binary search.
//!
//! ## Notes
//! - Tables store **lowercase** spellings only. [`ReservedWords::is_reserved`] folds the candidate to lowercase, so
//!   `DO`, `Do` and `do` are all reserved when `do` is.
//! - Sorting and uniqueness are checked by the `vocab_guardrails` test; an unsorted table would make lookups miss.
//!
//! ## Examples
//! ```rust
//! use speech_vocab::grammar;
//!
//! assert!(grammar::ADA.is_reserved("DO"));
//! assert!(!grammar::ADA.is_reserved("dog"));
//! assert!(grammar::RUST.is_reserved("Self"));
//! ```

pub mod ada_keywords;
pub mod rust_keywords;

/// A named, constant keyword table.
#[derive(Debug, Clone, Copy)]
pub struct ReservedWords {
    /// Human-readable grammar name, used in diagnostics.
    pub grammar: &'static str,
    /// Lowercase keywords in ascending byte order.
    pub words: &'static [&'static str],
}

impl ReservedWords {
    pub const fn new(grammar: &'static str, words: &'static [&'static str]) -> Self {
        Self { grammar, words }
    }

    /// Check whether `symbol` spells a keyword, ignoring ASCII case.
    pub fn is_reserved(&self, symbol: &str) -> bool {
        if symbol.bytes().any(|b| b.is_ascii_uppercase()) {
            let folded = symbol.to_ascii_lowercase();
            self.contains_folded(&folded)
        } else {
            self.contains_folded(symbol)
        }
    }

    fn contains_folded(&self, folded: &str) -> bool {
        self.words.binary_search(&folded).is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

/// Reserved words of Ada 2022, the grammar of the embedded speech runtime.
pub const ADA: ReservedWords = ReservedWords::new("Ada", ada_keywords::ADA_KEYWORDS);

/// Strict and reserved keywords of Rust (2024 edition).
pub const RUST: ReservedWords = ReservedWords::new("Rust", rust_keywords::RUST_KEYWORDS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert!(ADA.is_reserved("do"));
        assert!(ADA.is_reserved("DO"));
        assert!(ADA.is_reserved("Abstract"));
        assert!(!ADA.is_reserved("dot"));
    }

    #[test]
    fn ada_table_covers_ada_2022() {
        assert!(ADA.is_reserved("parallel"));
        assert_eq!(ADA.len(), 74);
    }

    #[test]
    fn empty_table_reserves_nothing() {
        let none = ReservedWords::new("none", &[]);
        assert!(none.is_empty());
        assert!(!none.is_reserved("do"));
    }

    #[test]
    fn rust_reserves_self_in_any_case() {
        assert!(RUST.is_reserved("self"));
        assert!(RUST.is_reserved("Self"));
        assert!(!RUST.is_reserved("selfish"));
    }
}
