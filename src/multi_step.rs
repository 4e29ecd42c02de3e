//! Turn-based environments driven by free-form responses.
use crate::error::EnvError;
use crate::models::{Action, Environment, Observation, StepResult};
use rand::prelude::*;
use std::collections::BTreeMap;

/// Outcome of a single turn of a [`MultiStepEnv`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Turn {
    /// Named reward components earned this turn.
    pub rewards: BTreeMap<String, f64>,
    /// Whether the episode is over.
    pub done: bool,
    /// Diagnostics, such as feedback on a rejected move.
    pub info: BTreeMap<String, String>,
}

impl Turn {
    /// A turn that continues the episode with a single reward component.
    pub fn component(name: &str, value: f64) -> Self {
        let mut rewards = BTreeMap::new();
        rewards.insert(name.to_owned(), value);
        Self {
            rewards,
            done: false,
            info: BTreeMap::new(),
        }
    }

    /// Mark the episode as finished.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.done = true;
        self
    }

    /// Attach a diagnostic entry.
    #[must_use]
    pub fn with_info<V: Into<String>>(mut self, key: &str, value: V) -> Self {
        self.info.insert(key.to_owned(), value.into());
        self
    }
}

/// Turn-based environment dynamics.
///
/// Defines how episodes start, how states are described to the agent, and
/// how a response advances the state. Does not manage state internally;
/// wrap with [`MultiStep`] to obtain an [`Environment`].
pub trait MultiStepEnv {
    type State;

    /// Arrange a fresh episode state.
    fn initial_state(&self, rng: &mut StdRng) -> Self::State;

    /// Describe a state to the agent.
    fn observe(&self, state: &Self::State) -> Observation;

    /// Advance the state with the agent's response.
    fn apply(&self, state: &mut Self::State, action: &Action, rng: &mut StdRng) -> Turn;

    /// Cut off episodes after this many agent turns.
    fn max_steps(&self) -> Option<u32> {
        None
    }
}

/// Adds internal state, rng, and step counting to a [`MultiStepEnv`].
pub struct MultiStep<E: MultiStepEnv> {
    pub env: E,
    state: Option<E::State>,
    steps: u32,
    rng: StdRng,
}

impl<E: MultiStepEnv> MultiStep<E> {
    pub fn new(env: E, seed: u64) -> Self {
        Self {
            env,
            state: None,
            steps: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of agent turns taken in the current episode.
    pub const fn steps(&self) -> u32 {
        self.steps
    }
}

impl<E: MultiStepEnv> Environment for MultiStep<E> {
    fn reset(&mut self) -> Result<Observation, EnvError> {
        let state = self.env.initial_state(&mut self.rng);
        let observation = self.env.observe(&state);
        self.state = Some(state);
        self.steps = 0;
        Ok(observation)
    }

    fn step(&mut self, action: &Action) -> Result<StepResult, EnvError> {
        let state = self.state.as_mut().ok_or(EnvError::NotStarted)?;
        let turn = self.env.apply(state, action, &mut self.rng);
        self.steps += 1;

        let mut done = turn.done;
        // Cut off over-long episodes without treating the state as terminal
        if let Some(max_steps) = self.env.max_steps() {
            if self.steps >= max_steps {
                done = true;
            }
        }

        let observation = self.env.observe(state);
        if done {
            self.state = None;
        }
        Ok(StepResult {
            observation,
            reward: turn.rewards.values().sum(),
            rewards: turn.rewards,
            done,
            info: turn.info,
        })
    }
}
