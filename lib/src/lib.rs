//! Narrows a Wordle word list as clues accumulate, and proposes the next guess.
//!
//! Record each guess's [`GuessOutcome`] in a [`ConstraintState`], then use a [`CandidateFilter`]
//! to keep only the words that are still possible. A [`GuessStrategy`] picks the next guess from
//! what remains, either at random or via a [`PromptDescription`] handed to some
//! [`RecommendationSource`].

mod constraints;
mod data;
mod filter;
mod prompt;
mod results;
mod session;
mod strategies;

pub use constraints::*;
pub use data::*;
pub use filter::*;
pub use prompt::*;
pub use results::*;
pub use session::*;
pub use strategies::*;
