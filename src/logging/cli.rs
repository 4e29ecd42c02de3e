//! Command-line logger
use super::{Event, Loggable, Logger};
use enum_map::{enum_map, EnumMap};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};
use yansi::Paint;

/// Logger that periodically writes aggregate summaries to stdout.
pub struct CLILogger {
    events: EnumMap<Event, EventLog>,

    display_period: Duration,
    last_display_time: Instant,
}

impl CLILogger {
    pub fn new(display_period: Duration) -> Self {
        Self {
            events: enum_map! { _ => EventLog::new() },
            display_period,
            last_display_time: Instant::now(),
        }
    }

    /// Write the pending summaries and clear the aggregates.
    pub fn display(&mut self) {
        for (event, event_log) in self.events.iter_mut() {
            if event_log.index == event_log.summary_start_index {
                continue;
            }
            println!(
                "{} {:?}s {} - {} {}",
                Paint::blue("====").bold(),
                event,
                event_log.summary_start_index,
                event_log.index - 1,
                Paint::blue("====").bold(),
            );
            for (name, aggregator) in &mut event_log.aggregators {
                println!("{}: {}", name, aggregator);
                aggregator.clear();
            }
            event_log.summary_start_index = event_log.index;
        }
        self.last_display_time = Instant::now();
    }
}

impl Logger for CLILogger {
    fn log(&mut self, event: Event, name: &str, value: Loggable) {
        let aggregators = &mut self.events[event].aggregators;
        if let Some(aggregator) = aggregators.get_mut(name) {
            aggregator.update(value);
        } else {
            aggregators.insert(name.into(), Aggregator::new(value));
        }
    }

    fn done(&mut self, event: Event) {
        self.events[event].index += 1;
        if self.last_display_time.elapsed() >= self.display_period {
            self.display();
        }
    }
}

impl Drop for CLILogger {
    fn drop(&mut self) {
        // Ensure everything is flushed.
        self.display();
    }
}

struct EventLog {
    /// Global index for this event
    index: u64,
    /// Value of `index` at the start of this summary period
    summary_start_index: u64,
    /// An aggregator for each log entry.
    aggregators: BTreeMap<String, Aggregator>,
}

impl EventLog {
    fn new() -> Self {
        Self {
            index: 0,
            summary_start_index: 0,
            aggregators: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
enum Aggregator {
    ScalarMean { sum: f64, count: u64 },
    MessageCounts(BTreeMap<Cow<'static, str>, u64>),
}

impl Aggregator {
    fn new(value: Loggable) -> Self {
        match value {
            Loggable::Scalar(x) => Self::ScalarMean { sum: x, count: 1 },
            Loggable::Message(message) => {
                let mut counts = BTreeMap::new();
                counts.insert(message, 1);
                Self::MessageCounts(counts)
            }
        }
    }

    /// Fold a value into the aggregate. A value of a different kind restarts
    /// the aggregate.
    fn update(&mut self, value: Loggable) {
        match (self, value) {
            (Self::ScalarMean { sum, count }, Loggable::Scalar(x)) => {
                *sum += x;
                *count += 1;
            }
            (Self::MessageCounts(counts), Loggable::Message(message)) => {
                *counts.entry(message).or_insert(0) += 1;
            }
            (slot, value) => *slot = Self::new(value),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::ScalarMean { sum, count } => {
                *sum = 0.0;
                *count = 0;
            }
            Self::MessageCounts(counts) => counts.clear(),
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ScalarMean { sum, count } => {
                if *count == 0 {
                    write!(f, "none")
                } else {
                    write!(f, "{}", sum / (*count as f64))
                }
            }
            Self::MessageCounts(counts) => {
                let mut first = true;
                for (message, count) in counts {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "[x{}] {}", count, message)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_mean() {
        let mut aggregator = Aggregator::new(Loggable::Scalar(1.0));
        aggregator.update(Loggable::Scalar(3.0));
        assert_eq!(aggregator.to_string(), "2");
    }

    #[test]
    fn message_counts() {
        let mut aggregator = Aggregator::new("illegal".into());
        aggregator.update("illegal".into());
        aggregator.update("timeout".into());
        assert_eq!(aggregator.to_string(), "[x2] illegal, [x1] timeout");
    }

    #[test]
    fn kind_change_restarts() {
        let mut aggregator = Aggregator::new(Loggable::Scalar(1.0));
        aggregator.update("message".into());
        assert_eq!(aggregator.to_string(), "[x1] message");
    }

    #[test]
    fn logger_aggregates_by_event() {
        let mut logger = CLILogger::new(Duration::from_secs(3600));
        logger.log(Event::Step, "reward", 1.0.into());
        logger.done(Event::Step);
        logger.log(Event::Step, "reward", 0.0.into());
        logger.done(Event::Step);
        assert_eq!(logger.events[Event::Step].index, 2);
    }
}
