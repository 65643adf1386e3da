use wordle_clue_filter::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::result::Result;
use std::sync::Arc;

fn words(words: &[&str]) -> Vec<Arc<str>> {
    words.iter().map(|word| Arc::from(*word)).collect()
}

fn many_words(count: usize) -> Vec<Arc<str>> {
    (0..count)
        .map(|index| {
            let first = (b'a' + (index / 26) as u8) as char;
            let second = (b'a' + (index % 26) as u8) as char;
            Arc::from(format!("{first}{second}xyz").as_str())
        })
        .collect()
}

#[test]
fn build_prompt_description_no_candidates() {
    let mut rng = StdRng::seed_from_u64(7);

    let description = build_prompt_description(
        &ConstraintState::new(),
        &[],
        &PromptConfig::default(),
        &mut rng,
    );

    assert_eq!(description, None);
}

#[test]
fn build_prompt_description_small_list_is_sorted() {
    let mut rng = StdRng::seed_from_u64(7);

    let description = build_prompt_description(
        &ConstraintState::new(),
        &words(&["zebra", "apple", "water"]),
        &PromptConfig::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(description.sample, words(&["apple", "water", "zebra"]));
    assert_eq!(description.correct, None);
    assert_eq!(description.misplaced, None);
    assert_eq!(description.absent, None);
    assert_eq!(description.clues().count(), 0);
}

#[test]
fn build_prompt_description_samples_large_list() {
    let mut rng = StdRng::seed_from_u64(42);
    let candidates = many_words(100);
    let config = PromptConfig { max_sample_size: 10 };

    let description =
        build_prompt_description(&ConstraintState::new(), &candidates, &config, &mut rng).unwrap();

    assert_eq!(description.sample.len(), 10);
    assert!(description.sample.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(description
        .sample
        .iter()
        .all(|word| candidates.contains(word)));
}

#[test]
fn build_prompt_description_exactly_max_keeps_all() {
    let mut rng = StdRng::seed_from_u64(1);
    let candidates = many_words(25);

    let description = build_prompt_description(
        &ConstraintState::new(),
        &candidates,
        &PromptConfig::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(description.sample, candidates);
}

#[test]
fn prompt_description_display() -> Result<(), WordleError> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = ConstraintState::new();
    state.record_clues(&Clues::from_patterns("a....", ".l...", "bo")?)?;
    state.record_clues(&Clues::from_patterns("....e", "...e.", "")?)?;

    let description = build_prompt_description(
        &state,
        &words(&["attle", "apple", "asyle"]),
        &PromptConfig::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(
        description.to_string(),
        "Solve the puzzle by guessing a five-letter word using these clues.\n\
         Words must contain these letters in the following positions: 'a' in the first, 'e' in the fifth.\n\
         Words must contain these letters with the position restrictions: 'l' should not be in the second position, 'e' should not be in the fourth position.\n\
         Words must not contain these letters: 'b', 'o'.\n\
         List of candidate words:\n\
         apple\n\
         asyle\n\
         attle"
    );
    Ok(())
}

#[test]
fn prompt_description_display_no_clues() {
    let description = PromptDescription {
        correct: None,
        misplaced: None,
        absent: None,
        sample: words(&["word1", "word2"]),
    };

    assert_eq!(
        description.to_string(),
        "Solve the puzzle by guessing a five-letter word using these clues.\n\
         List of candidate words:\n\
         word1\n\
         word2"
    );
}
