//! Text-driven agent environments.
//!
//! An agent interacts through free-form textual responses. Each environment
//! extracts a move from the response, advances its state, and replies with a
//! rendered observation, named reward components, and an episode-done flag.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod agents;
pub mod error;
pub mod logging;
pub mod models;
pub mod multi_step;
pub mod rlcards_env;
pub mod simulation;
pub mod single_step;
#[cfg(test)]
pub mod testing;
pub mod tic_tac_toe;

pub use models::{Action, Environment, Observation, StepResult};
pub use multi_step::MultiStepEnv;
pub use rlcards_env::{ActionExtractor, BlackjackEnv, DoudizhuEnv, LeducHoldemEnv, RLCardsEnv};
pub use single_step::SingleStepEnv;
pub use tic_tac_toe::{Opponent, TicTacToeEnv};
