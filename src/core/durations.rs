//! Immutable mapping from states to countdown durations.

use super::state::State;
use crate::builder::DurationMapBuilder;
use crate::error::TimerError;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Durations a timer waits before firing, keyed by state.
///
/// The map is fixed once built: it exposes no way to insert, remove or
/// change entries. Entries are copied into shared storage when the map is
/// created, so cloning is cheap and every clone sees the same durations.
///
/// In configuration the map is written as an object of state to
/// milliseconds:
///
/// ```rust
/// use state_timer::core::{DurationMap, StateName};
/// use std::time::Duration;
///
/// let map: DurationMap<StateName> =
///     DurationMap::from_json(r#"{ "active": 5, "idle": 86400000 }"#).unwrap();
///
/// assert_eq!(map.get(&"active".into()), Some(Duration::from_millis(5)));
/// assert_eq!(map.get(&"idle".into()), Some(Duration::from_secs(24 * 60 * 60)));
/// ```
#[derive(Clone)]
pub struct DurationMap<S: State> {
    entries: Arc<HashMap<S, Duration>>,
}

impl<S: State> DurationMap<S> {
    /// Start building a duration map.
    pub fn builder() -> DurationMapBuilder<S> {
        DurationMapBuilder::new()
    }

    /// Parse a duration map from a JSON object of state to milliseconds.
    pub fn from_json(json: &str) -> Result<Self, TimerError>
    where
        S: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Duration configured for `state`, if any.
    pub fn get(&self, state: &S) -> Option<Duration> {
        self.entries.get(state).copied()
    }

    /// Check whether `state` has a configured duration.
    pub fn contains(&self, state: &S) -> bool {
        self.entries.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all configured states and their durations.
    pub fn iter(&self) -> impl Iterator<Item = (&S, Duration)> {
        self.entries.iter().map(|(state, duration)| (state, *duration))
    }

    /// Verify that every state in `states` has a duration.
    ///
    /// Meant to run once at startup, so that later resets cannot hit an
    /// unknown state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use state_timer::core::{DurationMap, StateName};
    /// use std::time::Duration;
    ///
    /// let map: DurationMap<StateName> = [(StateName::from("active"), Duration::from_millis(5))]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert!(map.ensure_covers([StateName::from("active")]).is_ok());
    /// assert!(map
    ///     .ensure_covers([StateName::from("active"), StateName::from("idle")])
    ///     .is_err());
    /// ```
    pub fn ensure_covers<I>(&self, states: I) -> Result<(), TimerError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut missing: Vec<String> = Vec::new();
        for state in states {
            if !self.contains(&state) && !missing.iter().any(|name| name == state.name()) {
                missing.push(state.name().to_string());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TimerError::MissingStates { states: missing })
        }
    }
}

impl<S: State> FromIterator<(S, Duration)> for DurationMap<S> {
    fn from_iter<I: IntoIterator<Item = (S, Duration)>>(iter: I) -> Self {
        Self {
            entries: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<S: State> From<HashMap<S, Duration>> for DurationMap<S> {
    fn from(entries: HashMap<S, Duration>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl<S: State> From<&HashMap<S, Duration>> for DurationMap<S> {
    fn from(entries: &HashMap<S, Duration>) -> Self {
        Self::from(entries.clone())
    }
}

impl<S: State, const N: usize> From<[(S, Duration); N]> for DurationMap<S> {
    fn from(entries: [(S, Duration); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: State> fmt::Debug for DurationMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl<S: State + Serialize> Serialize for DurationMap<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (state, duration) in self.entries.iter() {
            map.serialize_entry(state, &as_millis(*duration))?;
        }
        map.end()
    }
}

impl<'de, S: State + Deserialize<'de>> Deserialize<'de> for DurationMap<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = HashMap::<S, u64>::deserialize(deserializer)?;
        Ok(millis
            .into_iter()
            .map(|(state, ms)| (state, Duration::from_millis(ms)))
            .collect())
    }
}
