//! Word lookup under Turkish case folding.

use crate::error::PlacementError;
use crate::turkish;
use crate::words::CandidateWord;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Anything that can answer "is this a word?".
///
/// Implementations receive the word as it appears on the board and do their
/// own folding.
pub trait Lexicon {
    /// Whether `word` is accepted.
    fn contains(&self, word: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for std::sync::Arc<L> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A set of words stored Turkish-lowercased.
///
/// Built once, then only read, so one instance can be shared between
/// threads behind a reference or an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from words in any case.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Adds a word, returning false if it was already present.
    ///
    /// Surrounding whitespace is trimmed and empty entries are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(turkish::fold(word))
    }

    /// Whether the folded form of `word` is present.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&turkish::fold(word))
    }

    /// Number of distinct folded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word was loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The stored (folded) words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        Dictionary::contains(self, word)
    }
}

/// Checks candidates in order and stops at the first unknown word.
///
/// The error carries the word with its board spelling, not the folded form.
#[instrument(skip(candidates, lexicon), fields(candidates = candidates.len()))]
pub fn check_words<L: Lexicon + ?Sized>(
    candidates: Vec<CandidateWord>,
    lexicon: &L,
) -> Result<Vec<CandidateWord>, PlacementError> {
    if let Some(unknown) = candidates.iter().find(|c| !lexicon.contains(c.word())) {
        debug!(word = unknown.word(), "Word not in dictionary");
        return Err(PlacementError::InvalidWord(unknown.word().to_string()));
    }
    debug!("All words accepted");
    Ok(candidates)
}
