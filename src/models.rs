//! Core types exchanged between an agent and an environment.
use crate::error::EnvError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An observation presented to the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Rendered prompt describing the current state.
    pub text: String,
    /// Auxiliary key-value context, such as the list of legal moves.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl Observation {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            context: BTreeMap::new(),
        }
    }

    /// Attach a context entry.
    #[must_use]
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// A free-form agent response.
///
/// Environments derive a move from the response text; the caller never
/// submits a structured move directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Raw response text.
    pub response: String,
}

impl Action {
    pub fn new<S: Into<String>>(response: S) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl From<&str> for Action {
    fn from(response: &str) -> Self {
        Self::new(response)
    }
}

impl From<String> for Action {
    fn from(response: String) -> Self {
        Self::new(response)
    }
}

/// The outcome of a single environment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Observation of the resulting state.
    pub observation: Observation,
    /// Total reward; the sum of the components in `rewards`.
    pub reward: f64,
    /// Named reward components.
    pub rewards: BTreeMap<String, f64>,
    /// Whether this step ends the episode.
    pub done: bool,
    /// Diagnostics, such as feedback on a rejected move.
    pub info: BTreeMap<String, String>,
}

/// A text-driven environment with internal state.
///
/// Malformed or illegal responses are in-band outcomes (a feedback
/// observation with a zero or negative reward component), not errors.
/// Errors are reserved for protocol misuse.
pub trait Environment {
    /// Begin a new episode.
    ///
    /// Must be called before the first step and again after an episode
    /// finishes. Any episode in progress is abandoned.
    fn reset(&mut self) -> Result<Observation, EnvError>;

    /// Advance one interaction.
    ///
    /// Returns [`EnvError::NotStarted`] when called before `reset` or after
    /// a step reported `done`.
    fn step(&mut self, action: &Action) -> Result<StepResult, EnvError>;
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn reset(&mut self) -> Result<Observation, EnvError> {
        E::reset(self)
    }

    fn step(&mut self, action: &Action) -> Result<StepResult, EnvError> {
        E::step(self, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_context() {
        let observation = Observation::new("state").with_context("legal_moves", "1 2 3");
        assert_eq!(observation.text, "state");
        assert_eq!(
            observation.context.get("legal_moves").map(String::as_str),
            Some("1 2 3")
        );
    }

    #[test]
    fn action_from_str() {
        let action: Action = "<Action>5</Action>".into();
        assert_eq!(action.response, "<Action>5</Action>");
    }

    #[test]
    fn step_result_serialize() {
        let result = StepResult {
            observation: Observation::new("done"),
            reward: 1.0,
            rewards: [("win".to_owned(), 1.0)].into_iter().collect(),
            done: true,
            info: BTreeMap::new(),
        };
        let serialized = serde_json::to_string(&result).unwrap();
        let deserialized: StepResult = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, result);
    }
}
