//! Lexicon normalization.
//!
//! Turns the raw, authoring-order word list into the canonical [`Lexicon`]: case-folded, deduplicated, and sorted by
//! byte order. The position of a word in the lexicon is the value the external word enumeration assigns to it, so this
//! order is load-bearing.
//!
//! ## Notes
//!
//! - The result depends only on the *set* of distinct words: any permutation or duplication of the input yields the
//!   same lexicon.
//! - Validation happens on every token before any output exists; the first bad token aborts the run.

use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{DictError, InvalidWordReason};

/// A validated lexicon word: one or more lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Validate and fold one raw token.
    ///
    /// `index` is the token's position in the raw input and is only used for the error.
    pub fn parse(index: usize, raw: &str) -> Result<Self, DictError> {
        if raw.is_empty() {
            return Err(DictError::invalid_word(index, raw, InvalidWordReason::Empty));
        }
        let folded = raw.to_ascii_lowercase();
        if let Some(ch) = folded.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(DictError::invalid_word(index, raw, InvalidWordReason::NonAlphabetic(ch)));
        }
        Ok(Word(folded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display spelling: first letter upper-cased (`love` → `Love`).
    pub fn capitalized(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut chars = self.0.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
        out
    }

    /// The two-letter grouping prefix, upper-cased. Single-letter words double their letter (`i` → `II`).
    pub fn prefix(&self) -> String {
        let bytes = self.0.as_bytes();
        let (a, b) = match bytes {
            [only] => (*only, *only),
            [first, second, ..] => (*first, *second),
            // Words are non-empty by construction.
            [] => return String::new(),
        };
        [a.to_ascii_uppercase() as char, b.to_ascii_uppercase() as char]
            .iter()
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical, duplicate-free, sorted word sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Ordinal of `word` in the lexicon (its enumeration value), if present.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).ok()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Normalize raw tokens into a [`Lexicon`].
///
/// ## Errors
///
/// Returns [`DictError::InvalidWord`] for an empty token or one containing anything other than ASCII letters.
#[tracing::instrument(skip_all, fields(raw_count = raw.len()))]
pub fn normalize<S: AsRef<str>>(raw: &[S]) -> Result<Lexicon, DictError> {
    let mut set = BTreeSet::new();
    for (index, token) in raw.iter().enumerate() {
        set.insert(Word::parse(index, token.as_ref())?);
    }
    let words: Vec<Word> = set.into_iter().collect();
    tracing::debug!(
        distinct = words.len(),
        duplicates = raw.len() - words.len(),
        "normalized lexicon"
    );
    Ok(Lexicon { words })
}
