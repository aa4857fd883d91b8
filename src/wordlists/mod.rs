//! Word lists and the word source
//!
//! Loads the external dictionary (with a built-in fallback) and exposes it
//! through the [`WordSource`] capability.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{BUNDLED_DICTIONARY, FALLBACK, FALLBACK_TARGET};
pub use loader::PendingDictionary;
pub use source::{Dictionary, LoadStatus, WordSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not valid");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn fallback_target_is_in_fallback_list() {
        assert!(FALLBACK.contains(&FALLBACK_TARGET));
    }

    #[test]
    fn expected_fallback_count() {
        assert_eq!(FALLBACK.len(), 6, "Expected 6 fallback words");
    }
}
