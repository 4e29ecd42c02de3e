//! Logging statistics from simulation runs.
pub mod cli;

pub use cli::CLILogger;

use enum_map::Enum;
use std::borrow::Cow;

/// Simulation run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum Event {
    Step,
    Episode,
}

/// A value that can be logged.
#[derive(Debug, Clone)]
pub enum Loggable {
    /// A scalar value. Aggregated by taking means.
    Scalar(f64),
    /// A text message. Aggregated by counting occurrences.
    Message(Cow<'static, str>),
}

impl From<f64> for Loggable {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<&'static str> for Loggable {
    fn from(message: &'static str) -> Self {
        Self::Message(Cow::Borrowed(message))
    }
}

impl From<String> for Loggable {
    fn from(message: String) -> Self {
        Self::Message(Cow::Owned(message))
    }
}

/// Log statistics from a simulation run.
///
/// Values logged under one name within an event should share a kind; a
/// value of a different kind restarts the aggregate.
pub trait Logger {
    /// Log a value under `name` for the given event.
    fn log(&mut self, event: Event, name: &str, value: Loggable);

    /// Mark the end of an event.
    fn done(&mut self, event: Event);
}

/// Logger that does nothing.
impl Logger for () {
    fn log(&mut self, _: Event, _: &str, _: Loggable) {}

    fn done(&mut self, _: Event) {}
}
