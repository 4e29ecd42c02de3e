//! Card-game environments driven by extracted action tokens.
mod blackjack;
mod doudizhu;
mod leduc_holdem;

pub use blackjack::{Blackjack, BlackjackEnv, BlackjackMove};
pub use doudizhu::{Doudizhu, DoudizhuEnv, DoudizhuMove};
pub use leduc_holdem::{LeducHoldem, LeducHoldemEnv, LeducMove};

use crate::models::{Action, Observation};
use crate::multi_step::{MultiStepEnv, Turn};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use regex::{Regex, RegexBuilder};
use std::fmt;

static ACTION_PATTERN: Lazy<Regex> = Lazy::new(|| pattern_for("Action"));

fn pattern_for(tag: &str) -> Regex {
    let tag = regex::escape(tag);
    RegexBuilder::new(&format!(r"<{0}>\s*(.*?)\s*</{0}>", tag))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("an escaped tag always forms a valid pattern")
}

/// Extracts the move token from a free-form response.
///
/// Matches `<Tag>token</Tag>` case-insensitively and keeps the *last* match,
/// so a response may reason about several candidate moves before committing
/// to one.
#[derive(Debug, Clone)]
pub struct ActionExtractor {
    pattern: Regex,
}

impl ActionExtractor {
    pub fn new(tag: &str) -> Self {
        Self {
            pattern: pattern_for(tag),
        }
    }

    /// The token inside the last tag pair, if any.
    pub fn extract(&self, response: &str) -> Option<String> {
        self.pattern
            .captures_iter(response)
            .last()
            .map(|captures| captures[1].to_owned())
    }
}

/// Extracts `<Action>...</Action>` tags.
impl Default for ActionExtractor {
    fn default() -> Self {
        Self {
            pattern: ACTION_PATTERN.clone(),
        }
    }
}

/// Rules engine behind a card-game environment.
///
/// `apply` advances play, including any scripted opponents, until the agent
/// must act again or the game ends.
pub trait CardGame {
    type State;
    type Move: fmt::Display;

    /// Deal a fresh game.
    fn deal(&self, rng: &mut StdRng) -> Self::State;

    /// Moves available to the agent, in a stable order.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Interpret an extracted token as a legal move in the given state.
    fn parse_move(&self, state: &Self::State, token: &str) -> Option<Self::Move>;

    /// Play the agent's move.
    fn apply(&self, state: &mut Self::State, mv: &Self::Move, rng: &mut StdRng);

    /// Whether the game has finished.
    fn is_over(&self, state: &Self::State) -> bool;

    /// The agent's payoff in a finished game.
    fn payoff(&self, state: &Self::State) -> f64;

    /// Describe the state from the agent's point of view.
    fn render(&self, state: &Self::State) -> String;
}

/// Adapts a [`CardGame`] to the [`MultiStepEnv`] interface.
///
/// Responses that carry no action tag, or whose token does not name a legal
/// move, leave the game unchanged and earn an `illegal_move` component with
/// the legal moves repeated in the feedback. Terminal turns earn the game
/// payoff as a `payoff` component.
#[derive(Debug, Clone)]
pub struct RLCardsEnv<G: CardGame> {
    pub game: G,
    extractor: ActionExtractor,
    max_steps: u32,
}

impl<G: CardGame> RLCardsEnv<G> {
    pub fn new(game: G, max_steps: u32) -> Self {
        Self {
            game,
            extractor: ActionExtractor::default(),
            max_steps,
        }
    }
}

impl<G: CardGame> MultiStepEnv for RLCardsEnv<G> {
    type State = G::State;

    fn initial_state(&self, rng: &mut StdRng) -> G::State {
        self.game.deal(rng)
    }

    fn observe(&self, state: &G::State) -> Observation {
        let legal: Vec<String> = self
            .game
            .legal_moves(state)
            .iter()
            .map(ToString::to_string)
            .collect();
        Observation::new(self.game.render(state)).with_context("legal_moves", legal.join(" "))
    }

    fn apply(&self, state: &mut G::State, action: &Action, rng: &mut StdRng) -> Turn {
        let mv = self
            .extractor
            .extract(&action.response)
            .and_then(|token| self.game.parse_move(state, &token));
        let mv = match mv {
            Some(mv) => mv,
            None => {
                let legal: Vec<String> = self
                    .game
                    .legal_moves(state)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                return Turn::component("illegal_move", 0.0).with_info(
                    "feedback",
                    format!(
                        "reply with <Action>move</Action>; legal moves: {}",
                        legal.join(" ")
                    ),
                );
            }
        };

        self.game.apply(state, &mv, rng);
        if self.game.is_over(state) {
            Turn::component("payoff", self.game.payoff(state)).finish()
        } else {
            Turn::component("progress", 0.0)
        }
    }

    fn max_steps(&self) -> Option<u32> {
        Some(self.max_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_tagged_token() {
        let extractor = ActionExtractor::default();
        assert_eq!(
            extractor.extract("I will hit. <Action>hit</Action>").as_deref(),
            Some("hit")
        );
        assert_eq!(extractor.extract("no tag here"), None);
    }

    #[test]
    fn last_tag_wins() {
        let extractor = ActionExtractor::default();
        let response = "Maybe <Action>raise</Action>? No: <Action>fold</Action>";
        assert_eq!(extractor.extract(response).as_deref(), Some("fold"));
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        let extractor = ActionExtractor::default();
        assert_eq!(
            extractor.extract("<action>stand</ACTION>").as_deref(),
            Some("stand")
        );
    }

    #[test]
    fn token_may_span_lines() {
        let extractor = ActionExtractor::default();
        assert_eq!(
            extractor.extract("<Action>\n  hit\n</Action>").as_deref(),
            Some("hit")
        );
    }

    #[test]
    fn custom_tag() {
        let extractor = ActionExtractor::new("Answer");
        assert_eq!(extractor.extract("<Answer>42</Answer>").as_deref(), Some("42"));
        assert_eq!(extractor.extract("<Action>42</Action>"), None);
    }
}
