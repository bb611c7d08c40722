//! Ada rendering of the dictionary tables.
//!
//! The output is a library package spec. `Data` holds `'Access` values of the constant records exported by one
//! vocabulary package per namespace; `Image` holds the display spellings. Both are `constant array (<Word>)`, so the
//! compiler rejects the package if the table length differs from the enumeration's.
//!
//! ## Notes
//! - Ada has no one-element positional aggregate: a single entry is written as `(others => ...)`.
//! - An empty table is written as the Ada 2022 empty aggregate `[]`. An Ada enumeration cannot be empty, so this form
//!   is a placeholder for a degenerate word list and never compiles against a real `Word` type.

use speech_vocab::grammar::{self, ReservedWords};

use super::config::AdaConfig;
use super::writer::SourceWriter;
use super::{EmitError, GENERATED_NOTICE, Target};
use crate::allocator::{Dictionary, DictionaryEntry};

/// Renders the package spec consumed by the embedded speech runtime.
#[derive(Debug, Clone, Default)]
pub struct AdaTarget {
    config: AdaConfig,
}

impl AdaTarget {
    pub fn new(config: AdaConfig) -> Self {
        Self { config }
    }

    fn render_context(&self, w: &mut SourceWriter, dictionary: &Dictionary) {
        for unit in &self.config.context {
            w.writeln(&format!("with {unit};"));
        }
        for namespace in dictionary.namespaces() {
            w.writeln(&format!("with {}.{};", self.config.vocabulary, namespace.key));
        }
    }

    fn data_initializer(&self, entry: &DictionaryEntry) -> String {
        format!(
            "{}.{}.{}'Access",
            self.config.vocabulary_alias, entry.namespace, entry.identifier
        )
    }

    fn image_initializer(entry: &DictionaryEntry) -> String {
        format!("new String'(\"{}\")", entry.image())
    }

    /// Write `<name> : constant array (<Word>)` followed by the element type and the aggregate.
    fn render_table(&self, w: &mut SourceWriter, name: &str, element: &str, items: Vec<String>) {
        w.writeln(&format!("{name} : constant array ({})", self.config.word_type));
        w.indent();
        match items.len() {
            0 => w.writeln(&format!("of {element} := [];")),
            1 => {
                w.writeln(&format!("of {element} := (others =>"));
                w.indent();
                w.write_list(items, ");");
                w.dedent();
            }
            _ => {
                w.writeln(&format!("of {element} := ("));
                w.indent();
                w.write_list(items, ");");
                w.dedent();
            }
        }
        w.dedent();
    }
}

impl Target for AdaTarget {
    fn name(&self) -> &'static str {
        "ada"
    }

    fn reserved(&self) -> &'static ReservedWords {
        &grammar::ADA
    }

    fn render(&self, dictionary: &Dictionary) -> Result<String, EmitError> {
        let config = &self.config;
        let mut w = SourceWriter::new(config.indent_width);

        w.writeln(&format!("--  {GENERATED_NOTICE}"));
        self.render_context(&mut w, dictionary);
        w.blank_line();

        w.writeln(&format!("package {} is", config.package));
        w.indent();
        w.writeln(&format!(
            "package {} renames {};",
            config.vocabulary_alias, config.vocabulary
        ));
        w.writeln(&format!("--  {} words", dictionary.len()));
        w.writeln("pragma Style_Checks (Off);");
        w.blank_line();

        let data = dictionary.entries().iter().map(|e| self.data_initializer(e)).collect();
        self.render_table(
            &mut w,
            "Data",
            &format!("not null {}", config.record_access),
            data,
        );
        w.blank_line();

        let images = dictionary.entries().iter().map(Self::image_initializer).collect();
        self.render_table(&mut w, "Image", "not null access String", images);

        w.dedent();
        w.blank_line();
        w.writeln(&format!("end {};", config.package));
        Ok(w.finish())
    }
}
