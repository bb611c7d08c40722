//! Emission configuration for the output targets
//!
//! The defaults describe the embedded speech runtime the tables are compiled into. There is no configuration file:
//! a different runtime layout is expressed by building a config in code.

/// Configuration for the Ada target
#[derive(Debug, Clone)]
pub struct AdaConfig {
    /// Name of the generated package
    pub package: String,
    /// Parent package of the per-namespace vocabulary packages
    pub vocabulary: String,
    /// Local renaming of `vocabulary` used in table initializers
    pub vocabulary_alias: String,
    /// Enumeration type indexing both tables
    pub word_type: String,
    /// Access type of one audio-parameter record
    pub record_access: String,
    /// Context clauses emitted before the namespace imports
    pub context: Vec<String>,
    /// Number of spaces per indentation level
    pub indent_width: usize,
}

impl Default for AdaConfig {
    fn default() -> Self {
        Self {
            package: "WNM.Speech_Dictionary".to_string(),
            vocabulary: "LPC_Synth.Vocab_Festival".to_string(),
            vocabulary_alias: "Vocab".to_string(),
            word_type: "WNM.Speech.Word".to_string(),
            record_access: "LPC_Synth.LPC_Data_Const_Acc".to_string(),
            context: vec!["LPC_Synth".to_string(), "WNM.Speech".to_string()],
            indent_width: 3,
        }
    }
}

impl AdaConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated package name
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the vocabulary parent package
    pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Self {
        self.vocabulary = vocabulary.into();
        self
    }

    /// Set the word enumeration type
    pub fn with_word_type(mut self, word_type: impl Into<String>) -> Self {
        self.word_type = word_type.into();
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Configuration for the Rust target
///
/// Paths are written the way they appear in the generated module and parsed when rendering.
#[derive(Debug, Clone)]
pub struct RustConfig {
    /// Name of the generated module
    pub module: String,
    /// Module containing one submodule per namespace
    pub vocabulary: String,
    /// Type of one audio-parameter record
    pub record: String,
    /// Enumeration type indexing both tables
    pub word_type: String,
    /// Associated constant on `word_type` holding the number of words
    pub cardinality: String,
}

impl Default for RustConfig {
    fn default() -> Self {
        Self {
            module: "speech_dictionary".to_string(),
            vocabulary: "lpc_synth::vocab_festival".to_string(),
            record: "lpc_synth::LpcData".to_string(),
            word_type: "crate::speech::Word".to_string(),
            cardinality: "COUNT".to_string(),
        }
    }
}

impl RustConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated module name
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Set the vocabulary module path
    pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Self {
        self.vocabulary = vocabulary.into();
        self
    }

    /// Set the word enumeration type path
    pub fn with_word_type(mut self, word_type: impl Into<String>) -> Self {
        self.word_type = word_type.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ada_config_matches_runtime_layout() {
        let config = AdaConfig::default();
        assert_eq!(config.package, "WNM.Speech_Dictionary");
        assert_eq!(config.vocabulary, "LPC_Synth.Vocab_Festival");
        assert_eq!(config.vocabulary_alias, "Vocab");
        assert_eq!(config.word_type, "WNM.Speech.Word");
        assert_eq!(config.context, vec!["LPC_Synth", "WNM.Speech"]);
        assert_eq!(config.indent_width, 3);
    }

    #[test]
    fn test_ada_builder_chain() {
        let config = AdaConfig::new()
            .with_package("Demo.Dictionary")
            .with_vocabulary("Demo.Vocab")
            .with_word_type("Demo.Word")
            .with_indent_width(2);

        assert_eq!(config.package, "Demo.Dictionary");
        assert_eq!(config.vocabulary, "Demo.Vocab");
        assert_eq!(config.word_type, "Demo.Word");
        assert_eq!(config.indent_width, 2);
        // Other fields unchanged
        assert_eq!(config.vocabulary_alias, "Vocab");
    }

    #[test]
    fn test_builder_override() {
        let config = AdaConfig::new().with_indent_width(2).with_indent_width(8);
        assert_eq!(config.indent_width, 8); // Last value wins
    }

    #[test]
    fn test_default_rust_config() {
        let config = RustConfig::default();
        assert_eq!(config.module, "speech_dictionary");
        assert_eq!(config.word_type, "crate::speech::Word");
        assert_eq!(config.cardinality, "COUNT");
    }

    #[test]
    fn test_rust_builder_chain() {
        let config = RustConfig::new()
            .with_module("words")
            .with_vocabulary("vocab")
            .with_word_type("crate::Word");
        assert_eq!(config.module, "words");
        assert_eq!(config.vocabulary, "vocab");
        assert_eq!(config.word_type, "crate::Word");
        assert_eq!(config.record, "lpc_synth::LpcData");
    }
}
