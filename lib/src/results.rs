use crate::data::LocatedLetter;
use crate::data::WORD_LENGTH;
use std::collections::BTreeSet;
use std::result::Result;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

/// Indicates that an error occurred while recording clues or narrowing the candidate words.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The same location was recorded as correct with two different letters.
    #[error("location {location} is already known to be '{existing}', cannot also be '{new}'")]
    ConflictingConstraint {
        location: u8,
        existing: char,
        new: char,
    },
    /// A letter already known to be absent was reported as being in the word.
    #[error("the letter '{0}' is already known to be absent from the word")]
    AbsentLetterConfirmed(char),
    /// A clue referred to a location outside the word.
    #[error("location {0} is outside of the word")]
    InvalidLocation(u8),
    /// A clue or word contained a character outside of `a..=z`.
    #[error("the character '{0}' is not supported")]
    UnsupportedCharacter(char),
    /// A word or pattern had the wrong length. Provides the length that was found.
    #[error("expected words of length {expected}, found length {0}", expected = WORD_LENGTH)]
    WordLength(usize),
    /// Reading the word list failed.
    #[error("could not read the word list")]
    Io(#[from] std::io::Error),
    /// A filter pattern could not be compiled.
    #[error("could not compile a filter pattern")]
    Pattern(#[from] regex::Error),
}

/// The result of a single word guess, letter by letter.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

/// The clues revealed by a guess that did not solve the puzzle.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clues {
    /// Letters confirmed at exactly these locations.
    pub correct: BTreeSet<LocatedLetter>,
    /// Letters that are in the word, but not at the location where they were guessed.
    pub present: BTreeSet<LocatedLetter>,
    /// Letters that are not in the word at all.
    pub absent: BTreeSet<char>,
}

impl Clues {
    /// Converts letter-by-letter feedback into clue sets.
    ///
    /// A letter that is `NotPresent` at one location but `Correct` or `PresentNotHere` at another
    /// location of the same guess is in the word, just not at that location, so it is recorded
    /// as `present` rather than `absent`.
    pub fn from_guess_result(result: &GuessResult) -> Result<Clues, WordleError> {
        let letters = validate_word(result.guess)?;
        if result.results.len() != letters.len() {
            return Err(WordleError::WordLength(result.results.len()));
        }
        let found_elsewhere = |letter: char| {
            letters
                .iter()
                .zip(result.results.iter())
                .any(|(other, lr)| *other == letter && *lr != LetterResult::NotPresent)
        };

        let mut clues = Clues::default();
        for (index, (letter, lr)) in letters.iter().zip(result.results.iter()).enumerate() {
            let located = LocatedLetter::new(*letter, index as u8);
            match lr {
                LetterResult::Correct => {
                    clues.correct.insert(located);
                }
                LetterResult::PresentNotHere => {
                    clues.present.insert(located);
                }
                LetterResult::NotPresent if found_elsewhere(*letter) => {
                    clues.present.insert(located);
                }
                LetterResult::NotPresent => {
                    clues.absent.insert(*letter);
                }
            }
        }
        Ok(clues)
    }

    /// Parses clues entered by hand.
    ///
    /// `correct` and `present` are patterns with one character per location, using `.` for
    /// locations with no clue, e.g. `"a...e"`. `absent` lists the absent letters, e.g. `"xyz"`.
    pub fn from_patterns(correct: &str, present: &str, absent: &str) -> Result<Clues, WordleError> {
        let mut absent_letters = BTreeSet::new();
        for letter in absent.trim().to_lowercase().chars() {
            if letter.is_whitespace() || letter == ',' {
                continue;
            }
            absent_letters.insert(check_letter(letter)?);
        }
        Ok(Clues {
            correct: parse_pattern(correct)?,
            present: parse_pattern(present)?,
            absent: absent_letters,
        })
    }

    /// Returns `true` iff these clues contain no information.
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.present.is_empty() && self.absent.is_empty()
    }
}

/// The outcome of comparing one guess against the objective word.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GuessOutcome {
    /// The guess was the objective word.
    Solved,
    /// The guess was wrong, and revealed these clues.
    Clues(Clues),
}

impl GuessOutcome {
    /// Converts letter-by-letter feedback into an outcome. All-correct feedback is `Solved`.
    pub fn from_guess_result(result: &GuessResult) -> Result<GuessOutcome, WordleError> {
        let letters = validate_word(result.guess)?;
        if result.results.len() != letters.len() {
            return Err(WordleError::WordLength(result.results.len()));
        }
        if result.results.iter().all(|lr| *lr == LetterResult::Correct) {
            return Ok(GuessOutcome::Solved);
        }
        Clues::from_guess_result(result).map(GuessOutcome::Clues)
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, GuessOutcome::Solved)
    }
}

impl From<Clues> for GuessOutcome {
    fn from(clues: Clues) -> Self {
        GuessOutcome::Clues(clues)
    }
}

/// Returns the letter iff it is in the supported `a..=z` range.
pub(crate) fn check_letter(letter: char) -> Result<char, WordleError> {
    if letter.is_ascii_lowercase() {
        Ok(letter)
    } else {
        Err(WordleError::UnsupportedCharacter(letter))
    }
}

/// Checks that the word has the right length and only supported letters.
pub(crate) fn validate_word(word: &str) -> Result<Vec<char>, WordleError> {
    let letters = word
        .chars()
        .map(check_letter)
        .collect::<Result<Vec<char>, WordleError>>()?;
    if letters.len() != WORD_LENGTH {
        return Err(WordleError::WordLength(letters.len()));
    }
    Ok(letters)
}

fn parse_pattern(pattern: &str) -> Result<BTreeSet<LocatedLetter>, WordleError> {
    let pattern = pattern.trim().to_lowercase();
    let length = pattern.chars().count();
    if length != WORD_LENGTH {
        return Err(WordleError::WordLength(length));
    }
    pattern
        .chars()
        .enumerate()
        .filter(|(_, letter)| *letter != '.')
        .map(|(index, letter)| Ok(LocatedLetter::new(check_letter(letter)?, index as u8)))
        .collect()
}
