//! Builder API for duration maps.
//!
//! This module provides a fluent builder and a macro for declaring timer
//! states with minimal boilerplate.

pub mod macros;

use crate::core::{DurationMap, State};
use crate::error::TimerError;
use std::collections::HashMap;
use std::time::Duration;

/// Builder for constructing duration maps with a fluent API.
///
/// # Example
///
/// ```
/// use state_timer::builder::DurationMapBuilder;
/// use state_timer::core::StateName;
/// use std::time::Duration;
///
/// let map = DurationMapBuilder::new()
///     .state(StateName::from("active"), Duration::from_millis(5))
///     .state(StateName::from("idle"), Duration::from_secs(60))
///     .require([StateName::from("active"), StateName::from("idle")])
///     .build()
///     .unwrap();
///
/// assert_eq!(map.len(), 2);
/// ```
pub struct DurationMapBuilder<S: State> {
    entries: HashMap<S, Duration>,
    required: Vec<S>,
}

impl<S: State> DurationMapBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            required: Vec::new(),
        }
    }

    /// Set the duration for a state. A later call for the same state wins.
    pub fn state(mut self, state: S, duration: Duration) -> Self {
        self.entries.insert(state, duration);
        self
    }

    /// Set durations for several states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (S, Duration)>,
    {
        self.entries.extend(states);
        self
    }

    /// Require the finished map to cover these states.
    pub fn require<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.required.extend(states);
        self
    }

    /// Build the duration map.
    /// Returns an error if a required state has no duration.
    pub fn build(self) -> Result<DurationMap<S>, TimerError> {
        let map = DurationMap::from(self.entries);
        map.ensure_covers(self.required)?;
        Ok(map)
    }
}

impl<S: State> Default for DurationMapBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
