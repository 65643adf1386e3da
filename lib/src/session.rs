use crate::constraints::ConstraintState;
use crate::data::WordBank;
use crate::filter::CandidateFilter;
use crate::results::GuessOutcome;
use crate::results::WordleError;
use crate::strategies::GuessStrategy;
use log::info;
use log::warn;
use std::result::Result;
use std::sync::Arc;

/// Compares guesses against the objective word.
pub trait Judge {
    fn judge(&mut self, guess: &str) -> GuessOutcome;
}

impl<F> Judge for F
where
    F: FnMut(&str) -> GuessOutcome,
{
    fn judge(&mut self, guess: &str) -> GuessOutcome {
        self(guess)
    }
}

/// Limits on the number of guesses in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Games that take more guesses than this are lost, though guessing continues.
    pub max_attempts: u32,
    /// Guessing stops after this many guesses.
    pub abort_after: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_attempts: 6,
            abort_after: 20,
        }
    }
}

/// Where a game stands after recording an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Candidates remain; the next guess is needed.
    AwaitingGuess,
    /// The objective word was guessed.
    Solved,
    /// No candidates are consistent with the clues.
    Exhausted,
}

/// How a game ended. Each variant provides the guesses that were made, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionResult {
    /// The last guess was the objective word.
    Solved(Vec<Box<str>>),
    /// No candidates remained, or the strategy had no word to offer.
    Exhausted(Vec<Box<str>>),
    /// The guess limit was reached before the word was found.
    AttemptsExceeded(Vec<Box<str>>),
}

impl SessionResult {
    pub fn guesses(&self) -> &[Box<str>] {
        match self {
            SessionResult::Solved(guesses)
            | SessionResult::Exhausted(guesses)
            | SessionResult::AttemptsExceeded(guesses) => guesses,
        }
    }

    /// Returns `true` iff the word was found in at most `max_attempts` guesses.
    pub fn solved_within(&self, max_attempts: u32) -> bool {
        matches!(self, SessionResult::Solved(guesses) if guesses.len() <= max_attempts as usize)
    }
}

/// The state of a single game: what is known, and which words remain.
pub struct Session {
    state: ConstraintState,
    filter: CandidateFilter,
}

impl Session {
    pub fn new(bank: &WordBank) -> Session {
        Session {
            state: ConstraintState::new(),
            filter: CandidateFilter::new(bank),
        }
    }

    /// Records the outcome of the latest guess, and removes candidates that no longer fit.
    pub fn record(&mut self, outcome: &GuessOutcome) -> Result<SessionStatus, WordleError> {
        if outcome.is_solved() {
            return Ok(SessionStatus::Solved);
        }
        self.state.record_outcome(outcome)?;
        if self.filter.filter(&self.state)?.is_empty() {
            return Ok(SessionStatus::Exhausted);
        }
        Ok(SessionStatus::AwaitingGuess)
    }

    /// Asks the strategy for the next guess.
    pub fn next_guess<S: GuessStrategy + ?Sized>(&self, strategy: &mut S) -> Option<Arc<str>> {
        strategy.produce_next_guess(&self.state, self.filter.candidates())
    }

    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    pub fn candidates(&self) -> &[Arc<str>] {
        self.filter.candidates()
    }
}

/// Plays a game starting from `first_guess`, asking the strategy for every later guess.
pub fn play_session<J, S>(
    first_guess: &str,
    bank: &WordBank,
    judge: &mut J,
    strategy: &mut S,
    config: &SessionConfig,
) -> Result<SessionResult, WordleError>
where
    J: Judge + ?Sized,
    S: GuessStrategy + ?Sized,
{
    let mut session = Session::new(bank);
    let mut guesses: Vec<Box<str>> = Vec::new();
    let mut guess: Arc<str> = Arc::from(first_guess.trim().to_lowercase().as_str());
    loop {
        let attempt = guesses.len() as u32 + 1;
        if attempt > config.abort_after {
            warn!("exceeded max attempts: attempt {}", attempt);
            return Ok(SessionResult::AttemptsExceeded(guesses));
        }
        if attempt > config.max_attempts {
            warn!("failed game: attempt {} guess is {}", attempt, guess);
        } else {
            info!("attempt {} guess is {}", attempt, guess);
        }
        guesses.push(Box::from(guess.as_ref()));

        match session.record(&judge.judge(&guess))? {
            SessionStatus::Solved => return Ok(SessionResult::Solved(guesses)),
            SessionStatus::Exhausted => {
                info!("no candidate words left");
                return Ok(SessionResult::Exhausted(guesses));
            }
            SessionStatus::AwaitingGuess => {}
        }

        match session.next_guess(strategy) {
            Some(next) => guess = next,
            None => {
                info!("no guess was offered");
                return Ok(SessionResult::Exhausted(guesses));
            }
        }
    }
}
