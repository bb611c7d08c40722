//! The normalize → allocate → emit pipeline.
//!
//! Each stage returns a value; nothing is printed here. Callers get the full generated text only after every stage
//! succeeded, so a failed run never produces partial output.

use crate::allocator::{self, Dictionary};
use crate::emit::{self, Target};
use crate::errors::DictError;
use crate::lexicon;

/// Normalize and allocate `raw` for `target`, without rendering.
pub fn build_dictionary<S: AsRef<str>>(raw: &[S], target: &dyn Target) -> Result<Dictionary, DictError> {
    let lexicon = lexicon::normalize(raw)?;
    allocator::allocate(&lexicon, target.reserved())
}

/// Compile `raw` into the generated source text for `target`.
///
/// ## Errors
///
/// - [`DictError::InvalidWord`] for a malformed token.
/// - [`DictError::IdentifierCollision`] if two entities would share a generated symbol.
/// - [`DictError::Emit`] if the target cannot render the tables.
#[tracing::instrument(skip_all, fields(grammar = target.name(), raw_count = raw.len()))]
pub fn compile<S: AsRef<str>>(raw: &[S], target: &dyn Target) -> Result<String, DictError> {
    let dictionary = build_dictionary(raw, target)?;
    let text = emit::emit(&dictionary, target)?;
    tracing::info!(
        words = dictionary.len(),
        namespaces = dictionary.namespaces().len(),
        "compiled speech dictionary"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{AdaTarget, RustTarget};

    #[test]
    fn test_invalid_word_aborts_before_emission() {
        let err = compile(&["cat", "", "dog"], &AdaTarget::default()).unwrap_err();
        assert!(matches!(err, DictError::InvalidWord { index: 1, .. }));
    }

    #[test]
    fn test_reserved_set_comes_from_target() {
        let ada = build_dictionary(&["type"], &AdaTarget::default()).unwrap();
        let rust = build_dictionary(&["type", "with"], &RustTarget::default()).unwrap();
        assert_eq!(ada.entries()[0].identifier.as_str(), "Type_K");
        assert_eq!(rust.entries()[0].identifier.as_str(), "Type_K");
        // `with` is an Ada keyword but not a Rust one.
        assert_eq!(rust.entries()[1].identifier.as_str(), "With");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let a = compile(&["dog", "cat", "i", "cat"], &AdaTarget::default()).unwrap();
        let b = compile(&["i", "cat", "dog"], &AdaTarget::default()).unwrap();
        assert_eq!(a, b);
    }
}
