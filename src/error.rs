//! Error type
use thiserror::Error;

/// Error from misusing or building an environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// `step` was called with no live episode.
    #[error("no live episode; call reset() first")]
    NotStarted,
    /// A task-based environment was built without tasks.
    #[error("environment requires at least one task")]
    EmptyTaskSet,
}
