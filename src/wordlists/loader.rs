//! Word list loading utilities
//!
//! Reads dictionaries from disk, either as JSON (`{ "valid": [...] }`) or as a
//! plain list with one word per line, and loads them off the input thread.

use super::source::{Dictionary, LoadStatus};
use crate::core::Word;
use crate::error::DictionaryError;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

/// Words read from a dictionary file
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    /// Every acceptable guess
    pub valid: Vec<Word>,
    /// Possible targets; a subset of `valid`
    pub answers: Vec<Word>,
    /// Entries dropped because they were not valid words
    pub skipped: usize,
}

#[derive(Deserialize)]
struct DictionaryFile {
    valid: Vec<String>,
    #[serde(default)]
    answers: Option<Vec<String>>,
}

/// Load a dictionary file
///
/// Files ending in `.json` must have the shape `{ "valid": [...] }` with an
/// optional `"answers"` array; when `answers` is missing every valid word is a
/// possible answer. Any other file is read as one word per line. Entries that
/// are not valid words are skipped.
///
/// # Errors
///
/// Returns a `DictionaryError` if the file cannot be read or parsed, or if it
/// yields no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let lists = load_from_file("data/words.json").unwrap();
/// println!("Loaded {} words", lists.valid.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordLists, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let lists = if is_json {
        parse_json(&content)?
    } else {
        parse_lines(&content)
    };

    debug!(
        path = %path.display(),
        valid = lists.valid.len(),
        answers = lists.answers.len(),
        skipped = lists.skipped,
        "Read dictionary file"
    );
    Ok(lists)
}

/// Parse the JSON dictionary shape
///
/// # Errors
///
/// Returns `DictionaryError::Parse` for invalid JSON or the wrong shape,
/// `DictionaryError::Empty` when there are no entries and
/// `DictionaryError::Malformed` when no entry is a valid word.
pub fn parse_json(content: &str) -> Result<WordLists, DictionaryError> {
    let file: DictionaryFile = serde_json::from_str(content)?;
    let total = file.valid.len() + file.answers.as_ref().map_or(0, Vec::len);

    let (mut valid, mut skipped) = collect_words(file.valid);
    let answers = match file.answers {
        Some(raw) => {
            let (answers, skipped_answers) = collect_words(raw);
            skipped += skipped_answers;
            let mut seen: FxHashSet<Word> = valid.iter().cloned().collect();
            for answer in &answers {
                if seen.insert(answer.clone()) {
                    valid.push(answer.clone());
                }
            }
            answers
        }
        None => valid.clone(),
    };

    let lists = WordLists {
        valid,
        answers,
        skipped,
    };
    check_usable(total, lists)
}

/// Parse a plain list with one word per line
///
/// Blank lines are ignored.
#[must_use]
pub fn parse_lines(content: &str) -> WordLists {
    let (valid, skipped) = collect_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    );

    WordLists {
        answers: valid.clone(),
        valid,
        skipped,
    }
}

fn check_usable(total: usize, lists: WordLists) -> Result<WordLists, DictionaryError> {
    if total == 0 {
        return Err(DictionaryError::Empty);
    }
    if lists.answers.is_empty() {
        return Err(DictionaryError::Malformed(format!(
            "none of the {total} entries is a valid word"
        )));
    }
    Ok(lists)
}

fn collect_words<I, S>(raw: I) -> (Vec<Word>, usize)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut skipped = 0;
    let words = raw
        .into_iter()
        .filter_map(|entry| {
            let word = Word::new(entry).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();
    (words, skipped)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// A dictionary being loaded on a background thread
///
/// The result is always usable: any failure resolves to the fallback list.
/// Poll with [`PendingDictionary::try_finish`] to gate input until ready.
pub struct PendingDictionary {
    receiver: Receiver<(Dictionary, LoadStatus)>,
}

impl PendingDictionary {
    /// Start loading `path` (or the fallback list when `None`)
    #[must_use]
    pub fn spawn(path: Option<PathBuf>) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let outcome = Dictionary::initialize(path.as_deref());
            // Receiver dropped means the app quit before loading finished
            let _ = sender.send(outcome);
        });
        Self { receiver }
    }

    /// Return the dictionary if loading finished, without blocking
    #[must_use]
    pub fn try_finish(&self) -> Option<(Dictionary, LoadStatus)> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("Dictionary loader stopped without a result");
                Some(Dictionary::fallback_with_reason("loader thread exited"))
            }
        }
    }

    /// Block until loading finishes
    #[must_use]
    pub fn wait(self) -> (Dictionary, LoadStatus) {
        self.receiver.recv().unwrap_or_else(|_| {
            warn!("Dictionary loader stopped without a result");
            Dictionary::fallback_with_reason("loader thread exited")
        })
    }
}
