//! Word source capability
//!
//! Supplies target words and decides which guesses are acceptable.

use super::embedded::{BUNDLED_DICTIONARY, FALLBACK, FALLBACK_TARGET};
use super::loader::{WordLists, load_from_file, parse_json, words_from_slice};
use crate::core::Word;
use crate::error::DictionaryError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{info, warn};

/// Source of target words and judge of acceptable guesses
pub trait WordSource {
    /// Pick a uniformly random target
    ///
    /// Never fails: an empty answer set degrades to a fixed fallback word.
    fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Word;

    /// Check whether `candidate` may be submitted as a guess
    ///
    /// Case-insensitive; surrounding whitespace is ignored.
    fn is_acceptable_guess(&self, candidate: &str) -> bool;
}

/// How a dictionary came to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// External dictionary loaded
    Loaded { words: usize },
    /// External dictionary unavailable; built-in list in use
    Fallback { reason: String },
}

impl LoadStatus {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Dictionary-backed word source
///
/// The set of acceptable guesses always includes every answer.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    valid: FxHashSet<String>,
}

impl Dictionary {
    /// Build from separate guess and answer lists
    #[must_use]
    pub fn new(valid: &[Word], answers: Vec<Word>) -> Self {
        let valid = valid
            .iter()
            .chain(&answers)
            .map(|w| w.text().to_string())
            .collect();
        Self { answers, valid }
    }

    /// Build from a single list used both for answers and guesses
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self::new(&[], words)
    }

    /// The built-in fallback list
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(words_from_slice(FALLBACK))
    }

    pub(crate) fn fallback_with_reason(reason: impl Into<String>) -> (Self, LoadStatus) {
        (
            Self::fallback(),
            LoadStatus::Fallback {
                reason: reason.into(),
            },
        )
    }

    /// Load the dictionary at `path`, or the bundled one when no path is
    /// given, falling back to the built-in list on any failure
    ///
    /// Always returns a usable dictionary; the status says which one.
    #[must_use]
    pub fn initialize(path: Option<&Path>) -> (Self, LoadStatus) {
        let Some(path) = path else {
            return Self::bundled();
        };

        match load_from_file(path).and_then(Self::from_lists) {
            Ok(dictionary) => {
                info!(
                    path = %path.display(),
                    answers = dictionary.answer_count(),
                    valid = dictionary.valid_count(),
                    "Dictionary loaded"
                );
                let words = dictionary.valid_count();
                (dictionary, LoadStatus::Loaded { words })
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Using fallback word list");
                Self::fallback_with_reason(err.to_string())
            }
        }
    }

    fn bundled() -> (Self, LoadStatus) {
        match parse_json(BUNDLED_DICTIONARY).and_then(Self::from_lists) {
            Ok(dictionary) => {
                info!(
                    answers = dictionary.answer_count(),
                    valid = dictionary.valid_count(),
                    "Bundled dictionary loaded"
                );
                let words = dictionary.valid_count();
                (dictionary, LoadStatus::Loaded { words })
            }
            Err(err) => {
                warn!(error = %err, "Bundled dictionary unusable, using fallback word list");
                Self::fallback_with_reason(err.to_string())
            }
        }
    }

    /// Build from loaded lists
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if there are no answers.
    pub fn from_lists(lists: WordLists) -> Result<Self, DictionaryError> {
        if lists.answers.is_empty() {
            return Err(DictionaryError::Empty);
        }
        if lists.skipped > 0 {
            warn!(skipped = lists.skipped, "Skipped invalid dictionary entries");
        }
        Ok(Self::new(&lists.valid, lists.answers))
    }

    /// Pick a random answer, failing when there are none
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the answer set is empty.
    pub fn try_pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, DictionaryError> {
        self.answers
            .choose(rng)
            .cloned()
            .ok_or(DictionaryError::Empty)
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }
}

impl WordSource for Dictionary {
    fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.try_pick_target(rng).unwrap_or_else(|err| {
            warn!(error = %err, fallback = FALLBACK_TARGET, "No answers available");
            fallback_target()
        })
    }

    fn is_acceptable_guess(&self, candidate: &str) -> bool {
        self.valid.contains(&candidate.trim().to_uppercase())
    }
}

fn fallback_target() -> Word {
    Word::new(FALLBACK_TARGET).expect("fallback target is a valid word")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn acceptable_guess_is_case_insensitive() {
        let dictionary = Dictionary::from_words(words(&["HELLO", "WORLD"]));
        assert!(dictionary.is_acceptable_guess("hello"));
        assert!(dictionary.is_acceptable_guess("World"));
        assert!(!dictionary.is_acceptable_guess("crane"));
        assert!(!dictionary.is_acceptable_guess("hell"));
        assert!(dictionary.is_acceptable_guess(" hello\n"));
    }

    #[test]
    fn guesses_may_exceed_answers() {
        let dictionary = Dictionary::new(&words(&["CRANE", "SLATE"]), words(&["HELLO"]));
        assert!(dictionary.is_acceptable_guess("crane"));
        assert!(dictionary.is_acceptable_guess("hello"));
        assert_eq!(dictionary.answer_count(), 1);
        assert_eq!(dictionary.valid_count(), 3);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(dictionary.pick_target(&mut rng).text(), "HELLO");
        }
    }

    #[test]
    fn pick_target_is_a_known_answer() {
        let dictionary = Dictionary::from_words(words(&["HELLO", "WORLD", "CRANE"]));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let target = dictionary.pick_target(&mut rng);
            assert!(dictionary.is_acceptable_guess(target.text()));
        }
    }

    #[test]
    fn empty_answers_fall_back_to_fixed_word() {
        let dictionary = Dictionary::from_words(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            dictionary.try_pick_target(&mut rng),
            Err(DictionaryError::Empty)
        ));
        assert_eq!(dictionary.pick_target(&mut rng).text(), FALLBACK_TARGET);
    }

    #[test]
    fn fallback_list_matches_embedded_words() {
        let dictionary = Dictionary::fallback();
        assert_eq!(dictionary.answer_count(), FALLBACK.len());
        for word in FALLBACK {
            assert!(dictionary.is_acceptable_guess(word));
        }
        assert!(dictionary.is_acceptable_guess(FALLBACK_TARGET));
    }

    #[test]
    fn initialize_without_path_uses_bundled_dictionary() {
        let (dictionary, status) = Dictionary::initialize(None);
        assert!(!status.is_fallback());
        assert!(dictionary.is_acceptable_guess("crane"));
        assert!(dictionary.is_acceptable_guess("HELLO"));
        assert!(dictionary.answer_count() > FALLBACK.len());
    }

    #[test]
    fn initialize_missing_file_uses_fallback() {
        let (dictionary, status) = Dictionary::initialize(Some(Path::new("/nonexistent/words.json")));
        assert!(status.is_fallback());
        assert_eq!(dictionary.answer_count(), FALLBACK.len());
    }

    #[test]
    fn initialize_malformed_file_uses_fallback() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "valid": "HELLO" }}"#).unwrap();

        let (dictionary, status) = Dictionary::initialize(Some(file.path()));
        assert!(status.is_fallback());
        assert!(!dictionary.is_acceptable_guess("HELLO"));
    }

    #[test]
    fn initialize_empty_text_file_uses_fallback() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let (_, status) = Dictionary::initialize(Some(file.path()));
        assert!(status.is_fallback());
    }

    #[test]
    fn initialize_valid_file_loads() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "valid": ["HELLO", "WORLD", "CRANE"] }}"#).unwrap();

        let (dictionary, status) = Dictionary::initialize(Some(file.path()));
        assert_eq!(status, LoadStatus::Loaded { words: 3 });
        assert!(dictionary.is_acceptable_guess("crane"));
        assert!(!dictionary.is_acceptable_guess("TAFEL"));
    }

    #[test]
    fn bundled_dictionary_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/words.json");
        let (dictionary, status) = Dictionary::initialize(Some(&path));
        assert!(!status.is_fallback());
        assert!(dictionary.is_acceptable_guess("HELLO"));
        assert!(dictionary.is_acceptable_guess("SPEED"));
        assert!(dictionary.is_acceptable_guess("ERASE"));
    }
}
