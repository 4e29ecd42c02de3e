//! Actors producing responses from observations.
use crate::models::{Action, Observation};
use rand::prelude::*;

/// Produces a response to each observation.
pub trait Actor {
    fn act(&mut self, observation: &Observation) -> Action;
}

/// Plays a uniformly random advertised legal move.
///
/// Reads the `legal_moves` context entry and wraps the chosen token in
/// action tags. Responds with empty text when no moves are advertised.
#[derive(Debug, Clone)]
pub struct RandomActor {
    rng: StdRng,
}

impl RandomActor {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Actor for RandomActor {
    fn act(&mut self, observation: &Observation) -> Action {
        let token = observation
            .context
            .get("legal_moves")
            .and_then(|moves| moves.split_whitespace().choose(&mut self.rng));
        match token {
            Some(token) => Action::new(format!("<Action>{}</Action>", token)),
            None => Action::new(""),
        }
    }
}

/// Replays a fixed sequence of responses, then empty text.
#[derive(Debug, Clone)]
pub struct ScriptedActor {
    responses: std::collections::VecDeque<String>,
}

impl ScriptedActor {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

impl Actor for ScriptedActor {
    fn act(&mut self, _observation: &Observation) -> Action {
        Action::new(self.responses.pop_front().unwrap_or_default())
    }
}
