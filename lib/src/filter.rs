use crate::constraints::ConstraintState;
use crate::data::WordBank;
use crate::data::WORD_LENGTH;
use crate::results::WordleError;
use log::info;
use log::trace;
use regex::bytes::Regex;
use regex::bytes::RegexBuilder;
use std::result::Result;
use std::sync::Arc;

/// Holds the words that are still possible for the current game.
#[derive(Clone, Debug)]
pub struct CandidateFilter {
    candidates: Vec<Arc<str>>,
}

impl CandidateFilter {
    /// Starts with every word in the bank as a candidate.
    pub fn new(bank: &WordBank) -> CandidateFilter {
        CandidateFilter {
            candidates: bank.to_vec(),
        }
    }

    /// Starts with the given words as candidates.
    pub fn from_words(words: Vec<Arc<str>>) -> CandidateFilter {
        CandidateFilter { candidates: words }
    }

    /// Restores every word in the bank, e.g. to start a new game.
    pub fn reset(&mut self, bank: &WordBank) {
        self.candidates = bank.to_vec();
    }

    /// The words that are still possible, in corpus order.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` iff no candidates remain.
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Removes every candidate that is inconsistent with the given state, and returns the
    /// remaining candidates.
    pub fn filter(&mut self, state: &ConstraintState) -> Result<&[Arc<str>], WordleError> {
        let before_size = self.candidates.len();
        let patterns = FilterPatterns::compile(state)?;
        patterns.retain_matching(&mut self.candidates);
        info!(
            "before_size: {}, after_size: {}",
            before_size,
            self.candidates.len()
        );
        Ok(&self.candidates)
    }
}

/// Returns the words that are consistent with the given state, in corpus order.
pub fn filter_candidates(
    words: &[Arc<str>],
    state: &ConstraintState,
) -> Result<Vec<Arc<str>>, WordleError> {
    let mut candidates = words.to_vec();
    FilterPatterns::compile(state)?.retain_matching(&mut candidates);
    Ok(candidates)
}

/// The three filter passes, compiled from a [`ConstraintState`].
struct FilterPatterns {
    /// Matches a word containing any absent letter. `None` if no letters are absent.
    absent: Option<Regex>,
    /// One anchored template per misplaced letter, matching words with the letter at that
    /// location.
    misplaced: Vec<Regex>,
    /// Anchored template of the correct letters, with wildcards elsewhere.
    correct: Regex,
}

impl FilterPatterns {
    fn compile(state: &ConstraintState) -> Result<FilterPatterns, WordleError> {
        let snapshot = state.snapshot();

        // An empty character class is invalid, and would not mean "no letters" anyway.
        let absent = if snapshot.absent_letters.is_empty() {
            None
        } else {
            let letters: String = snapshot.absent_letters.iter().collect();
            Some(build_regex(&format!("[{}]", regex::escape(&letters)))?)
        };

        let misplaced = snapshot
            .misplaced_positions
            .iter()
            .map(|ll| {
                let mut template = [None; WORD_LENGTH];
                template[ll.location as usize] = Some(ll.letter);
                build_regex(&anchored_template(&template))
            })
            .collect::<Result<Vec<Regex>, WordleError>>()?;

        let mut template = [None; WORD_LENGTH];
        for ll in snapshot.correct_positions {
            template[ll.location as usize] = Some(ll.letter);
        }
        let correct = build_regex(&anchored_template(&template))?;

        Ok(FilterPatterns {
            absent,
            misplaced,
            correct,
        })
    }

    /// Applies the passes in order: absent letters, then misplaced letters, then correct
    /// letters.
    fn retain_matching(&self, words: &mut Vec<Arc<str>>) {
        if let Some(absent) = &self.absent {
            words.retain(|word| !absent.is_match(word.as_bytes()));
            trace!("{} words remain after the absent letter pass", words.len());
        }
        for misplaced in &self.misplaced {
            words.retain(|word| !misplaced.is_match(word.as_bytes()));
        }
        trace!("{} words remain after the misplaced letter pass", words.len());
        words.retain(|word| self.correct.is_match(word.as_bytes()));
        trace!("{} words remain after the correct letter pass", words.len());
    }
}

/// Builds a full-word pattern such as `^a...e$` from the known letters.
fn anchored_template(template: &[Option<char>; WORD_LENGTH]) -> String {
    let mut pattern = String::from("^");
    for maybe_letter in template {
        match maybe_letter {
            Some(letter) => pattern.push_str(&regex::escape(&letter.to_string())),
            None => pattern.push('.'),
        }
    }
    pattern.push('$');
    pattern
}

fn build_regex(pattern: &str) -> Result<Regex, WordleError> {
    let mut builder = RegexBuilder::new(pattern);
    builder.unicode(false);
    Ok(builder.build()?)
}
