use crate::constraints::ConstraintState;
use crate::prompt::build_prompt_description;
use crate::prompt::PromptConfig;
use crate::prompt::PromptDescription;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Chooses the next guess from the remaining candidates.
pub trait GuessStrategy {
    /// Returns the next word to guess, or `None` if this strategy has no word to offer.
    fn produce_next_guess(
        &mut self,
        state: &ConstraintState,
        candidates: &[Arc<str>],
    ) -> Option<Arc<str>>;
}

/// Returns a uniformly random candidate, or `None` if there are no candidates.
pub fn pick_random<R: Rng + ?Sized>(candidates: &[Arc<str>], rng: &mut R) -> Option<Arc<str>> {
    candidates.choose(rng).map(Arc::clone)
}

/// Guesses at random from the remaining candidates.
pub struct RandomGuesser<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomGuesser<R> {
    pub fn new(rng: R) -> RandomGuesser<R> {
        RandomGuesser { rng }
    }
}

impl<R: Rng> GuessStrategy for RandomGuesser<R> {
    fn produce_next_guess(
        &mut self,
        _state: &ConstraintState,
        candidates: &[Arc<str>],
    ) -> Option<Arc<str>> {
        pick_random(candidates, &mut self.rng)
    }
}

/// Supplies a recommended guess for a description of the game so far.
///
/// This could be a person at a terminal, or a language model.
pub trait RecommendationSource {
    /// Returns the recommended word, or `None` if no recommendation could be made.
    fn recommend(&mut self, description: &PromptDescription) -> Option<String>;
}

impl<F> RecommendationSource for F
where
    F: FnMut(&PromptDescription) -> Option<String>,
{
    fn recommend(&mut self, description: &PromptDescription) -> Option<String> {
        self(description)
    }
}

/// Describes the clues and a sample of the candidates, and guesses whatever the source
/// recommends.
pub struct PromptGuesser<S: RecommendationSource, R: Rng> {
    source: S,
    config: PromptConfig,
    rng: R,
}

impl<S: RecommendationSource, R: Rng> PromptGuesser<S, R> {
    pub fn new(source: S, config: PromptConfig, rng: R) -> PromptGuesser<S, R> {
        PromptGuesser {
            source,
            config,
            rng,
        }
    }

    /// Returns the recommendation source, e.g. to inspect the descriptions it received.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: RecommendationSource, R: Rng> GuessStrategy for PromptGuesser<S, R> {
    fn produce_next_guess(
        &mut self,
        state: &ConstraintState,
        candidates: &[Arc<str>],
    ) -> Option<Arc<str>> {
        let description =
            build_prompt_description(state, candidates, &self.config, &mut self.rng)?;
        debug!("prompt:\n{description}");
        let recommendation = self.source.recommend(&description)?;
        Some(Arc::from(recommendation.trim().to_lowercase().as_str()))
    }
}
