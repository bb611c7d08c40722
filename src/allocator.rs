//! Namespace allocation.
//!
//! Assigns every lexicon word a namespace (its two-letter prefix group) and an identifier (its capitalized spelling),
//! escaping anything that spells a keyword of the output grammar.
//!
//! ## Escaping rule
//!
//! A namespace key or identifier whose lowercase form is reserved gets [`DISAMBIGUATION_SUFFIX`] appended, and nothing
//! else is ever rewritten. The rule is the same for namespaces and identifiers of any length:
//!
//! | word       | prefix | namespace | identifier    |
//! |------------|--------|-----------|---------------|
//! | `do`       | `DO`   | `DO_K`    | `Do_K`        |
//! | `dog`      | `DO`   | `DO_K`    | `Dog`         |
//! | `abstract` | `AB`   | `AB`      | `Abstract_K`  |
//! | `i`        | `II`   | `II`      | `I`           |
//!
//! ## Notes
//!
//! - Symbol ownership is tracked in ordered maps and compared case-insensitively (Ada identifiers are
//!   case-insensitive). An escaped symbol that is itself reserved, or that another entity already owns, is an
//!   [`DictError::IdentifierCollision`].
//! - The namespace list is sorted by namespace key, never by insertion or hash order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use speech_vocab::grammar::ReservedWords;

use crate::errors::DictError;
use crate::lexicon::{Lexicon, Word};

/// Suffix appended to a namespace key or identifier that spells a reserved word.
pub const DISAMBIGUATION_SUFFIX: &str = "_K";

/// Emitted name of a namespace group (already escaped).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespaceKey(String);

impl NamespaceKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Emitted name of a word's audio record inside its namespace (already escaped).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A namespace group: all words sharing one raw prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Raw upper-cased prefix (`DO`).
    pub prefix: String,
    /// Emitted name (`DO_K`).
    pub key: NamespaceKey,
    /// Number of words in the group.
    pub members: usize,
}

/// One compiled word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: Word,
    pub namespace: NamespaceKey,
    pub identifier: Identifier,
    /// Position in the lexicon, equal to the word's enumeration value.
    pub ordinal: usize,
}

impl DictionaryEntry {
    /// Spelling used in the display table.
    pub fn image(&self) -> String {
        self.word.capitalized()
    }
}

/// The allocator's result: entries in lexicon order plus the distinct namespaces they use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    namespaces: Vec<Namespace>,
}

impl Dictionary {
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Distinct namespaces, sorted by key.
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries
            .binary_search_by(|e| e.word.as_str().cmp(word))
            .ok()
            .map(|i| &self.entries[i])
    }
}

/// Allocate namespaces and identifiers for every word of `lexicon`.
///
/// ## Errors
///
/// Returns [`DictError::IdentifierCollision`] if escaping produces a reserved word, or if two distinct namespaces or
/// two distinct words in one namespace would share a symbol.
#[tracing::instrument(skip_all, fields(word_count = lexicon.len(), grammar = reserved.grammar))]
pub fn allocate(lexicon: &Lexicon, reserved: &ReservedWords) -> Result<Dictionary, DictError> {
    let mut groups: BTreeMap<String, Namespace> = BTreeMap::new();
    let mut namespace_owners = SymbolTable::default();
    let mut identifier_owners = SymbolTable::default();
    let mut entries = Vec::with_capacity(lexicon.len());

    for (ordinal, word) in lexicon.iter().enumerate() {
        let prefix = word.prefix();
        let namespace = match groups.entry(prefix) {
            Entry::Occupied(mut group) => {
                group.get_mut().members += 1;
                group.get().key.clone()
            }
            Entry::Vacant(slot) => {
                let prefix = slot.key().clone();
                let key = NamespaceKey(escape(&prefix, reserved)?);
                namespace_owners.claim(key.as_str(), format!("namespace prefix `{prefix}`"))?;
                slot.insert(Namespace {
                    prefix,
                    key: key.clone(),
                    members: 1,
                })
                .key
                .clone()
            }
        };

        let identifier = Identifier(escape(&word.capitalized(), reserved)?);
        identifier_owners.claim(
            &format!("{namespace}.{identifier}"),
            format!("word `{word}`"),
        )?;

        entries.push(DictionaryEntry {
            word: word.clone(),
            namespace,
            identifier,
            ordinal,
        });
    }

    let mut namespaces: Vec<Namespace> = groups.into_values().collect();
    namespaces.sort_by(|a, b| a.key.cmp(&b.key));

    tracing::debug!(
        entries = entries.len(),
        namespaces = namespaces.len(),
        "allocated dictionary"
    );
    Ok(Dictionary { entries, namespaces })
}

/// Apply the escaping rule to one symbol.
fn escape(symbol: &str, reserved: &ReservedWords) -> Result<String, DictError> {
    if !reserved.is_reserved(symbol) {
        return Ok(symbol.to_string());
    }
    let escaped = format!("{symbol}{DISAMBIGUATION_SUFFIX}");
    if reserved.is_reserved(&escaped) {
        return Err(DictError::collision(
            escaped.clone(),
            format!("escaped `{symbol}`"),
            format!("{} keyword `{}`", reserved.grammar, escaped.to_ascii_lowercase()),
        ));
    }
    tracing::debug!(symbol, escaped = %escaped, "escaped reserved word");
    Ok(escaped)
}

/// Case-insensitive symbol → owner map.
#[derive(Debug, Default)]
struct SymbolTable {
    owners: BTreeMap<String, String>,
}

impl SymbolTable {
    fn claim(&mut self, symbol: &str, owner: String) -> Result<(), DictError> {
        match self.owners.entry(symbol.to_ascii_lowercase()) {
            Entry::Vacant(slot) => {
                slot.insert(owner);
                Ok(())
            }
            Entry::Occupied(existing) if *existing.get() == owner => Ok(()),
            Entry::Occupied(existing) => Err(DictError::collision(symbol, existing.get().clone(), owner)),
        }
    }
}
