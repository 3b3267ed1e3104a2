//! Error types for state timers and duration maps.

use std::fmt;
use thiserror::Error;

/// The timer operation that was asked to adopt a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Creating a timer with its initial state.
    Construct,
    /// Rearming a timer for a new state.
    Reset,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construct => f.write_str("created"),
            Self::Reset => f.write_str("reset"),
        }
    }
}

/// Errors that can occur when creating or driving a state timer.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The requested state has no entry in the timer's duration map.
    #[error("state timer {operation} with unknown state \"{state}\"")]
    UnknownState { state: String, operation: Operation },

    /// A duration map does not cover every state it was required to.
    #[error("duration map is missing states: {}", .states.join(", "))]
    MissingStates { states: Vec<String> },

    /// A duration map could not be read from configuration.
    #[error("Invalid duration map configuration: {0}")]
    Config(String),

    /// The alarm clock thread could not be started.
    #[error("Failed to start alarm clock: {0}")]
    Clock(#[from] std::io::Error),
}

impl From<serde_json::Error> for TimerError {
    fn from(err: serde_json::Error) -> Self {
        TimerError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_names_state_and_operation() {
        let err = TimerError::UnknownState {
            state: "X".to_string(),
            operation: Operation::Construct,
        };
        assert_eq!(err.to_string(), "state timer created with unknown state \"X\"");

        let err = TimerError::UnknownState {
            state: "busy".to_string(),
            operation: Operation::Reset,
        };
        assert_eq!(err.to_string(), "state timer reset with unknown state \"busy\"");
    }

    #[test]
    fn missing_states_lists_every_state() {
        let err = TimerError::MissingStates {
            states: vec!["idle".to_string(), "busy".to_string()],
        };
        assert_eq!(err.to_string(), "duration map is missing states: idle, busy");
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: TimerError = serde_json::from_str::<u64>("nope").unwrap_err().into();
        assert!(matches!(err, TimerError::Config(_)));
    }
}
