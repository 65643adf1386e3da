use crate::data::LocatedLetter;
use crate::data::WORD_LENGTH;
use crate::results::check_letter;
use crate::results::Clues;
use crate::results::GuessOutcome;
use crate::results::WordleError;
use log::debug;
use std::collections::BTreeSet;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The letter knowledge accumulated across every guess of a single game.
///
/// The three sets only ever grow. Create a new `ConstraintState` for each game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintState {
    /// Letters that must occur in specific locations in the word. At most one per location.
    correct_positions: BTreeSet<LocatedLetter>,
    /// Letters that must be present, but must not be at these locations.
    misplaced_positions: BTreeSet<LocatedLetter>,
    /// Letters that must not be in the word.
    absent_letters: BTreeSet<char>,
}

/// A read-only view of a [`ConstraintState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstraintSnapshot<'a> {
    pub correct_positions: &'a BTreeSet<LocatedLetter>,
    pub misplaced_positions: &'a BTreeSet<LocatedLetter>,
    pub absent_letters: &'a BTreeSet<char>,
}

impl ConstraintState {
    /// Creates an empty state, with nothing known about the word.
    pub fn new() -> ConstraintState {
        ConstraintState::default()
    }

    /// Merges the clues from the given outcome into the accumulated state.
    ///
    /// Recording the same clues again has no effect. Letters reported as absent are ignored if
    /// they are also known (from this outcome or an earlier one) to be correct or present.
    ///
    /// Fails without modifying the state if the outcome is malformed or contradicts what is
    /// already known.
    pub fn record_outcome(&mut self, outcome: &GuessOutcome) -> Result<(), WordleError> {
        match outcome {
            GuessOutcome::Solved => Ok(()),
            GuessOutcome::Clues(clues) => self.record_clues(clues),
        }
    }

    /// Merges the given clues into the accumulated state. See
    /// [`record_outcome`](Self::record_outcome).
    pub fn record_clues(&mut self, clues: &Clues) -> Result<(), WordleError> {
        self.check_clues(clues)?;

        self.correct_positions.extend(clues.correct.iter().copied());
        self.misplaced_positions.extend(clues.present.iter().copied());
        for letter in &clues.absent {
            if self.is_known_correct(*letter) || self.is_known_misplaced(*letter) {
                debug!("ignoring absent letter '{letter}', it is known to be in the word");
                continue;
            }
            self.absent_letters.insert(*letter);
        }
        debug!("constraint state: {:?}", self);
        Ok(())
    }

    /// Returns `true` iff the letter is known to be at some location.
    pub fn is_known_correct(&self, letter: char) -> bool {
        self.correct_positions.iter().any(|ll| ll.letter == letter)
    }

    /// Returns `true` iff the letter is known to be in the word, but not at some location.
    pub fn is_known_misplaced(&self, letter: char) -> bool {
        self.misplaced_positions.iter().any(|ll| ll.letter == letter)
    }

    /// Returns `true` iff the letter is known to not be in the word.
    pub fn is_known_absent(&self, letter: char) -> bool {
        self.absent_letters.contains(&letter)
    }

    /// Returns the letter known to be at the given location, if any.
    pub fn correct_letter_at(&self, location: u8) -> Option<char> {
        self.correct_positions
            .iter()
            .find(|ll| ll.location == location)
            .map(|ll| ll.letter)
    }

    /// Returns `true` iff nothing is known yet.
    pub fn is_empty(&self) -> bool {
        self.correct_positions.is_empty()
            && self.misplaced_positions.is_empty()
            && self.absent_letters.is_empty()
    }

    /// Returns a view of everything known so far.
    pub fn snapshot(&self) -> ConstraintSnapshot<'_> {
        ConstraintSnapshot {
            correct_positions: &self.correct_positions,
            misplaced_positions: &self.misplaced_positions,
            absent_letters: &self.absent_letters,
        }
    }

    /// Returns `true` iff the given word satisfies every accumulated constraint.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        letters.len() == WORD_LENGTH
            && !letters
                .iter()
                .any(|letter| self.absent_letters.contains(letter))
            && self
                .misplaced_positions
                .iter()
                .all(|ll| letters[ll.location as usize] != ll.letter)
            && self
                .correct_positions
                .iter()
                .all(|ll| letters[ll.location as usize] == ll.letter)
    }

    fn check_clues(&self, clues: &Clues) -> Result<(), WordleError> {
        for ll in clues.correct.iter().chain(clues.present.iter()) {
            if ll.location as usize >= WORD_LENGTH {
                return Err(WordleError::InvalidLocation(ll.location));
            }
            check_letter(ll.letter)?;
            if self.is_known_absent(ll.letter) {
                return Err(WordleError::AbsentLetterConfirmed(ll.letter));
            }
        }
        for letter in &clues.absent {
            check_letter(*letter)?;
        }

        // Check against both the known letters and the other new ones.
        let mut correct_by_location: [Option<char>; WORD_LENGTH] = [None; WORD_LENGTH];
        for ll in self.correct_positions.iter().chain(clues.correct.iter()) {
            let slot = &mut correct_by_location[ll.location as usize];
            match slot {
                Some(existing) if *existing != ll.letter => {
                    return Err(WordleError::ConflictingConstraint {
                        location: ll.location,
                        existing: *existing,
                        new: ll.letter,
                    });
                }
                _ => *slot = Some(ll.letter),
            }
        }

        Ok(())
    }
}
