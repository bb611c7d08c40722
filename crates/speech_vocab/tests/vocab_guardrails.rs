use std::collections::BTreeSet;

use speech_vocab::grammar::{self, ReservedWords};
use speech_vocab::words::SPEECH_WORDS;

/// Guardrail against a keyword table that silently stops matching.
///
/// Lookups use a binary search over lowercase spellings, so a table that is unsorted, duplicated, or contains an
/// uppercase entry would let a keyword through to the generated source.
#[test]
fn keyword_tables_are_sorted_unique_and_lowercase() {
    for table in [grammar::ADA, grammar::RUST] {
        let offenders = table_offenders(&table);
        if !offenders.is_empty() {
            let mut msg = format!("Keyword table `{}` is malformed:\n\n", table.grammar);
            for line in offenders {
                msg.push_str(&format!("- {line}\n"));
            }
            panic!("{msg}");
        }
    }
}

fn table_offenders(table: &ReservedWords) -> Vec<String> {
    let mut offenders = Vec::new();
    for pair in table.words.windows(2) {
        if pair[0] >= pair[1] {
            offenders.push(format!("`{}` is not strictly before `{}`", pair[0], pair[1]));
        }
    }
    for word in table.iter() {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            offenders.push(format!("`{word}` is not a lowercase ASCII word"));
        }
    }
    offenders
}

#[test]
fn every_keyword_is_found_by_lookup() {
    for table in [grammar::ADA, grammar::RUST] {
        for word in table.iter() {
            assert!(table.is_reserved(word), "{}: lookup missed `{word}`", table.grammar);
            assert!(table.is_reserved(&word.to_ascii_uppercase()));
        }
        assert_eq!(table.iter().count(), table.len());
    }
}

/// The compiled-in lexicon must normalize without error.
#[test]
fn speech_words_are_lowercase_ascii_words() {
    let bad: Vec<(usize, &str)> = SPEECH_WORDS
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, w)| w.is_empty() || !w.bytes().all(|b| b.is_ascii_lowercase()))
        .collect();
    assert!(bad.is_empty(), "Invalid lexicon entries: {bad:?}");
}

#[test]
fn speech_words_cover_the_known_lexicon() {
    let distinct: BTreeSet<&str> = SPEECH_WORDS.iter().copied().collect();
    assert_eq!(distinct.len(), 286);
    // Authoring duplicates are expected; the compiler collapses them.
    assert!(SPEECH_WORDS.len() > distinct.len());
    for word in ["i", "do", "abstract", "body", "zone", "ten"] {
        assert!(distinct.contains(word), "missing `{word}`");
    }
}
