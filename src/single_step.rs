//! Single question-answer environments.
use crate::error::EnvError;
use crate::models::{Action, Environment, Observation, StepResult};
use crate::rlcards_env::ActionExtractor;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A question with its reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub question: String,
    pub answer: String,
}

impl Task {
    pub fn new<Q, A>(question: Q, answer: A) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
    {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Environment posing one task per episode.
///
/// `reset` samples a task uniformly at random; `step` grades the response
/// against the reference answer and always ends the episode. The graded
/// answer is the trailing `<Answer>...</Answer>` tag when present, otherwise
/// the whole response; comparison ignores surrounding whitespace and ASCII
/// case.
#[derive(Debug, Clone)]
pub struct SingleStepEnv {
    tasks: Vec<Task>,
    extractor: ActionExtractor,
    rng: StdRng,
    /// Index of the task awaiting an answer.
    active: Option<usize>,
}

impl SingleStepEnv {
    pub fn new(tasks: Vec<Task>, seed: u64) -> Result<Self, EnvError> {
        if tasks.is_empty() {
            return Err(EnvError::EmptyTaskSet);
        }
        Ok(Self {
            tasks,
            extractor: ActionExtractor::new("Answer"),
            rng: StdRng::seed_from_u64(seed),
            active: None,
        })
    }
}

impl Environment for SingleStepEnv {
    fn reset(&mut self) -> Result<Observation, EnvError> {
        let index = self.rng.gen_range(0..self.tasks.len());
        self.active = Some(index);
        Ok(Observation::new(self.tasks[index].question.clone()))
    }

    fn step(&mut self, action: &Action) -> Result<StepResult, EnvError> {
        let index = self.active.take().ok_or(EnvError::NotStarted)?;
        let task = &self.tasks[index];

        let answer = self
            .extractor
            .extract(&action.response)
            .unwrap_or_else(|| action.response.clone());
        let correct = answer.trim().eq_ignore_ascii_case(task.answer.trim());

        let mut rewards = BTreeMap::new();
        rewards.insert("correctness".to_owned(), if correct { 1.0 } else { 0.0 });
        let mut info = BTreeMap::new();
        if !correct {
            info.insert("expected".to_owned(), task.answer.clone());
        }
        Ok(StepResult {
            observation: Observation::new("Episode complete."),
            reward: rewards.values().sum(),
            rewards,
            done: true,
            info,
        })
    }
}
