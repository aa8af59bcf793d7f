//! Event System
//!
//! Activity-log events produced while polling and applying results

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Where an event originated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Spot price feed.
    Price,
    /// Wallet balance endpoint.
    Balance,
    /// Payment history endpoint.
    Transactions,
    /// The polling scheduler itself.
    Scheduler,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(source: Source, msg: String, log_level: LogLevel) -> Self {
        Self::new(source, msg, EventType::Success, log_level)
    }

    pub fn error(source: Source, msg: String, log_level: LogLevel) -> Self {
        Self::new(source, msg, EventType::Error, log_level)
    }

    pub fn scheduler(msg: String) -> Self {
        Self::new(Source::Scheduler, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Failures and info-level events are always shown
        if self.event_type == EventType::Error || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_source_and_type() {
        let event = Event::error(Source::Balance, "boom".to_string(), LogLevel::Warn);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Error ["));
        assert!(rendered.ends_with("Balance: boom"));
    }

    #[test]
    fn test_errors_are_always_displayed() {
        let event = Event::error(Source::Price, "x".to_string(), LogLevel::Debug);
        assert!(event.should_display());
        assert!(Event::scheduler("tick".to_string()).should_display());
    }
}
