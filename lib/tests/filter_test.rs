use wordle_clue_filter::*;

use std::result::Result;
use std::sync::Arc;

fn create_word_bank() -> Result<WordBank, WordleError> {
    WordBank::from_iterator(vec!["apple", "water", "zebra", "ample", "amble"])
}

fn words(words: &[&str]) -> Vec<Arc<str>> {
    words.iter().map(|word| Arc::from(*word)).collect()
}

fn record(state: &mut ConstraintState, correct: &str, present: &str, absent: &str) {
    state
        .record_clues(&Clues::from_patterns(correct, present, absent).unwrap())
        .unwrap();
}

#[test]
fn filter_with_no_constraints_keeps_everything() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);

    let remaining = filter.filter(&ConstraintState::new())?;

    assert_eq!(remaining, &bank[..]);
    Ok(())
}

#[test]
fn filter_correct_and_misplaced() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);
    let mut state = ConstraintState::new();
    record(&mut state, "a....", ".m...", "");

    let remaining = filter.filter(&state)?;

    // "ample" and "amble" both have 'm' in the second location.
    assert_eq!(remaining, words(&["apple"]));
    Ok(())
}

#[test]
fn filter_misplaced_letter_may_appear_elsewhere() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);
    let mut state = ConstraintState::new();
    record(&mut state, "a....", "..m..", "");

    let remaining = filter.filter(&state)?;

    assert_eq!(remaining, words(&["apple", "ample", "amble"]));
    Ok(())
}

#[test]
fn filter_absent_letter_anywhere() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);
    let mut state = ConstraintState::new();
    record(&mut state, ".....", ".....", "p");

    let remaining = filter.filter(&state)?;

    assert_eq!(remaining, words(&["water", "zebra", "amble"]));
    Ok(())
}

#[test]
fn filter_absent_letter_with_other_constraints() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);
    let mut state = ConstraintState::new();
    record(&mut state, "a....", "..m..", "p");

    let remaining = filter.filter(&state)?;

    // "apple" and "ample" fit the other clues, but contain 'p'.
    assert_eq!(remaining, words(&["amble"]));
    Ok(())
}

#[test]
fn filter_absent_letter_removes_words_matching_correct_template() -> Result<(), WordleError> {
    let mut filter = CandidateFilter::from_words(words(&["apple", "ample", "angle"]));
    let mut state = ConstraintState::new();
    record(&mut state, "a...e", ".....", "p");

    assert_eq!(filter.filter(&state)?, words(&["angle"]));
    Ok(())
}

#[test]
fn filter_accumulates_across_calls() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);
    let mut state = ConstraintState::new();

    record(&mut state, ".....", ".....", "t");
    assert_eq!(filter.filter(&state)?.len(), 4);

    record(&mut state, "....e", ".....", "");
    assert_eq!(filter.filter(&state)?, words(&["apple", "ample", "amble"]));
    assert_eq!(filter.len(), 3);
    Ok(())
}

#[test]
fn filter_to_nothing_is_exhausted() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);
    let mut state = ConstraintState::new();
    record(&mut state, ".....", ".....", "ae");

    let remaining = filter.filter(&state)?;

    assert!(remaining.is_empty());
    assert!(filter.is_exhausted());
    Ok(())
}

#[test]
fn filter_reset_restores_bank() -> Result<(), WordleError> {
    let bank = create_word_bank()?;
    let mut filter = CandidateFilter::new(&bank);
    let mut state = ConstraintState::new();
    record(&mut state, "z....", ".....", "");
    filter.filter(&state)?;
    assert_eq!(filter.candidates(), words(&["zebra"]));

    filter.reset(&bank);

    assert_eq!(filter.len(), bank.len());
    Ok(())
}

#[test]
fn filter_candidates_does_not_modify_input() -> Result<(), WordleError> {
    let all_words = words(&["apple", "water", "zebra"]);
    let mut state = ConstraintState::new();
    record(&mut state, ".....", "w....", "");

    let remaining = filter_candidates(&all_words, &state)?;

    assert_eq!(remaining, words(&["apple", "zebra"]));
    assert_eq!(all_words.len(), 3);
    Ok(())
}

#[test]
fn filter_from_words() -> Result<(), WordleError> {
    let mut filter = CandidateFilter::from_words(words(&["crane", "slate", "stare"]));
    let mut state = ConstraintState::new();
    record(&mut state, "s....", ".....", "l");

    assert_eq!(filter.filter(&state)?, words(&["stare"]));
    Ok(())
}
