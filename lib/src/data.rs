use crate::results::validate_word;
use crate::results::WordleError;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A letter along with its location in the word.
///
/// Ordered by location first, so sets of located letters read left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocatedLetter {
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
    pub letter: char,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { location, letter }
    }
}

/// Contains all the possible words for a Wordle game.
///
/// Every word is lower case and exactly [`WORD_LENGTH`] letters long.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut all_words = Vec::new();
        for maybe_line in word_reader.lines() {
            if let Some(word) = WordBank::normalize(&maybe_line?)? {
                all_words.push(word);
            }
        }
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` from the given words, normalized as in
    /// [`from_reader`](Self::from_reader).
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut all_words = Vec::new();
        for word in words {
            if let Some(word) = WordBank::normalize(word.as_ref())? {
                all_words.push(word);
            }
        }
        Ok(WordBank { all_words })
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    fn normalize(line: &str) -> Result<Option<Arc<str>>, WordleError> {
        let word = line.trim().to_lowercase();
        if word.is_empty() {
            return Ok(None);
        }
        validate_word(&word)?;
        Ok(Some(Arc::from(word.as_str())))
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
