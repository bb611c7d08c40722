//! Rust rendering of the dictionary tables.
//!
//! Emission builds a Rust syntax tree with `quote` and formats it via `prettyplease`, so the output is always
//! well-formed. References in `DATA` are `&'static` borrows of the vocabulary's records: non-owning and non-null by
//! construction. Both tables have the type-level length `<Word>::<COUNT>`.

use proc_macro2::TokenStream;
use quote::quote;
use speech_vocab::grammar::{self, ReservedWords};

use super::config::RustConfig;
use super::{EmitError, GENERATED_NOTICE, Target};
use crate::allocator::Dictionary;

/// Renders a Rust module for a Rust-hosted runtime.
#[derive(Debug, Clone, Default)]
pub struct RustTarget {
    config: RustConfig,
}

impl RustTarget {
    pub fn new(config: RustConfig) -> Self {
        Self { config }
    }

    /// Emit the module to a TokenStream (without formatting).
    pub fn render_tokens(&self, dictionary: &Dictionary) -> Result<TokenStream, EmitError> {
        let config = &self.config;
        let module = ident(&config.module)?;
        let vocabulary = path("vocabulary", &config.vocabulary)?;
        let record = path("record", &config.record)?;
        let word = path("word_type", &config.word_type)?;
        let cardinality = ident(&config.cardinality)?;

        let imports = dictionary
            .namespaces()
            .iter()
            .map(|ns| {
                let ns = ident(ns.key.as_str())?;
                Ok(quote! { use #vocabulary::#ns; })
            })
            .collect::<Result<Vec<_>, EmitError>>()?;

        let data = dictionary
            .entries()
            .iter()
            .map(|entry| {
                let ns = ident(entry.namespace.as_str())?;
                let id = ident(entry.identifier.as_str())?;
                Ok(quote! { &#ns::#id })
            })
            .collect::<Result<Vec<_>, EmitError>>()?;

        let images: Vec<String> = dictionary.entries().iter().map(|e| e.image()).collect();
        let count_doc = format!(" {} words", dictionary.len());

        Ok(quote! {
            #[doc = #count_doc]
            pub mod #module {
                #(#imports)*

                pub static DATA: [&#record; #word::#cardinality] = [#(#data),*];

                pub static IMAGE: [&str; #word::#cardinality] = [#(#images),*];
            }
        })
    }
}

impl Target for RustTarget {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn reserved(&self) -> &'static ReservedWords {
        &grammar::RUST
    }

    fn render(&self, dictionary: &Dictionary) -> Result<String, EmitError> {
        let tokens = self.render_tokens(dictionary)?;
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
        let formatted = prettyplease::unparse(&syntax_tree);
        Ok(format!("// {GENERATED_NOTICE}\n\n{formatted}"))
    }
}

/// Parse a generated or configured name; keywords are rejected.
fn ident(name: &str) -> Result<syn::Ident, EmitError> {
    syn::parse_str::<syn::Ident>(name).map_err(|_| EmitError::InvalidIdentifier(name.to_string()))
}

fn path(field: &'static str, value: &str) -> Result<syn::Path, EmitError> {
    syn::parse_str::<syn::Path>(value).map_err(|e| EmitError::InvalidPath {
        field,
        path: value.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use crate::lexicon::normalize;

    fn render_with(target: &RustTarget, words: &[&str]) -> Result<String, EmitError> {
        let dict = allocate(&normalize(words).unwrap(), target.reserved()).unwrap();
        target.render(&dict)
    }

    fn render(words: &[&str]) -> String {
        render_with(&RustTarget::default(), words).unwrap()
    }

    /// Collect the initializer expressions of a static array item by name.
    fn static_elems(text: &str, name: &str) -> Vec<String> {
        let file = syn::parse_file(text).unwrap();
        let syn::Item::Mod(module) = &file.items[0] else {
            panic!("expected a module item");
        };
        let (_, items) = module.content.as_ref().unwrap();
        for item in items {
            if let syn::Item::Static(s) = item {
                if s.ident == name {
                    let syn::Expr::Array(array) = s.expr.as_ref() else {
                        panic!("expected an array initializer");
                    };
                    return array.elems.iter().map(|e| quote!(#e).to_string().replace(' ', "")).collect();
                }
            }
        }
        panic!("static {name} not found");
    }

    #[test]
    fn test_output_parses_and_starts_with_notice() {
        let text = render(&["cat", "dog"]);
        assert!(text.starts_with("// Generated by speech-dict. Do not edit by hand.\n\n"));
        assert!(syn::parse_file(&text).is_ok());
        assert!(text.contains("pub mod speech_dictionary"));
    }

    #[test]
    fn test_tables_are_index_aligned() {
        let text = render(&["dog", "cat"]);
        assert_eq!(static_elems(&text, "DATA"), vec!["&CA::Cat", "&DO_K::Dog"]);
        assert_eq!(static_elems(&text, "IMAGE"), vec!["\"Cat\"", "\"Dog\""]);
    }

    #[test]
    fn test_table_type_names_word_cardinality() {
        let text = render(&["cat"]);
        assert!(text.contains("[&lpc_synth::LpcData; crate::speech::Word::COUNT]"));
        assert!(text.contains("[&str; crate::speech::Word::COUNT]"));
    }

    #[test]
    fn test_rust_keywords_are_escaped() {
        let text = render(&["self", "fn", "type", "cat"]);
        assert!(text.contains("use lpc_synth::vocab_festival::FN_K;"));
        assert!(text.contains("&SE::Self_K"));
        assert!(text.contains("&TY::Type_K"));
        assert!(text.contains("&CA::Cat"));
    }

    #[test]
    fn test_empty_dictionary_renders_empty_tables() {
        let text = render(&[]);
        assert!(static_elems(&text, "DATA").is_empty());
        assert!(static_elems(&text, "IMAGE").is_empty());
    }

    #[test]
    fn test_invalid_configured_path_is_reported() {
        let target = RustTarget::new(RustConfig::new().with_vocabulary("not a path"));
        let err = render_with(&target, &["cat"]).unwrap_err();
        assert!(matches!(err, EmitError::InvalidPath { field: "vocabulary", .. }));
    }

    #[test]
    fn test_keyword_module_name_is_rejected() {
        let target = RustTarget::new(RustConfig::new().with_module("mod"));
        let err = render_with(&target, &["cat"]).unwrap_err();
        assert!(matches!(err, EmitError::InvalidIdentifier(name) if name == "mod"));
    }
}
