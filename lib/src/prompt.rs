//! Describes the accumulated clues and a sample of the remaining candidates, in a form that a
//! person or a language model can use to choose the next guess.

use crate::constraints::ConstraintState;
use crate::data::LocatedLetter;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// The default maximum number of candidate words included in a description.
pub const DEFAULT_MAX_SAMPLE_SIZE: usize = 25;

/// Controls how prompt descriptions are built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptConfig {
    /// The maximum number of candidate words to include. Larger candidate lists are randomly
    /// sampled down to this size.
    pub max_sample_size: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
        }
    }
}

/// The clues known so far, plus a sorted sample of the remaining candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptDescription {
    /// Describes the letters known to be in specific locations, if any.
    pub correct: Option<String>,
    /// Describes the locations where present letters are known not to be, if any.
    pub misplaced: Option<String>,
    /// Lists the letters known not to be in the word, if any.
    pub absent: Option<String>,
    /// Candidate words in alphabetical order.
    pub sample: Vec<Arc<str>>,
}

/// Builds a description of the state and the given candidates.
///
/// If there are more than `config.max_sample_size` candidates, a uniformly random subset of that
/// size is included instead of all of them. Returns `None` if there are no candidates.
pub fn build_prompt_description<R: Rng + ?Sized>(
    state: &ConstraintState,
    candidates: &[Arc<str>],
    config: &PromptConfig,
    rng: &mut R,
) -> Option<PromptDescription> {
    if candidates.is_empty() {
        return None;
    }
    let mut sample: Vec<Arc<str>> = if candidates.len() > config.max_sample_size {
        candidates
            .choose_multiple(rng, config.max_sample_size)
            .cloned()
            .collect()
    } else {
        candidates.to_vec()
    };
    sample.sort_unstable();

    let snapshot = state.snapshot();
    Some(PromptDescription {
        correct: describe_correct(snapshot.correct_positions),
        misplaced: describe_misplaced(snapshot.misplaced_positions),
        absent: describe_absent(snapshot.absent_letters),
        sample,
    })
}

impl PromptDescription {
    /// Iterates over the clue sentences that have content.
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        [&self.correct, &self.misplaced, &self.absent]
            .into_iter()
            .filter_map(|clause| clause.as_deref())
    }
}

impl fmt::Display for PromptDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Solve the puzzle by guessing a five-letter word using these clues."
        )?;
        for clue in self.clues() {
            writeln!(f, "{}", clue)?;
        }
        write!(f, "List of candidate words:")?;
        for word in &self.sample {
            write!(f, "\n{}", word)?;
        }
        Ok(())
    }
}

fn ordinal(location: u8) -> &'static str {
    match location {
        0 => "first",
        1 => "second",
        2 => "third",
        3 => "fourth",
        4 => "fifth",
        _ => "unknown",
    }
}

fn describe_correct(correct: &BTreeSet<LocatedLetter>) -> Option<String> {
    if correct.is_empty() {
        return None;
    }
    let pairs: Vec<String> = correct
        .iter()
        .map(|ll| format!("'{}' in the {}", ll.letter, ordinal(ll.location)))
        .collect();
    Some(format!(
        "Words must contain these letters in the following positions: {}.",
        pairs.join(", ")
    ))
}

fn describe_misplaced(misplaced: &BTreeSet<LocatedLetter>) -> Option<String> {
    if misplaced.is_empty() {
        return None;
    }
    let pairs: Vec<String> = misplaced
        .iter()
        .map(|ll| {
            format!(
                "'{}' should not be in the {} position",
                ll.letter,
                ordinal(ll.location)
            )
        })
        .collect();
    Some(format!(
        "Words must contain these letters with the position restrictions: {}.",
        pairs.join(", ")
    ))
}

fn describe_absent(absent: &BTreeSet<char>) -> Option<String> {
    if absent.is_empty() {
        return None;
    }
    let letters: Vec<String> = absent.iter().map(|letter| format!("'{}'", letter)).collect();
    Some(format!(
        "Words must not contain these letters: {}.",
        letters.join(", ")
    ))
}
