//! The State trait and a string-backed state label.
//!
//! A state is an opaque label used only as a key into a duration map.
//! Equality and hashing are the only relations the timer relies on.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for timer states.
///
/// States carry no ordering and no behavior of their own. They are compared
/// for equality and hashed when the timer looks up the duration configured
/// for them.
///
/// # Required Traits
///
/// - `Clone`: the timer keeps a copy of the state it last adopted
/// - `Eq` + `Hash`: states key the duration map
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: duration maps are shared read-only across threads
///
/// # Example
///
/// ```rust
/// use state_timer::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Activity {
///     Active,
///     Idle,
/// }
///
/// impl State for Activity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Active => "active",
///             Self::Idle => "idle",
///         }
///     }
/// }
///
/// assert_eq!(Activity::Idle.name(), "idle");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// A string label usable as a timer state.
///
/// Handy when the set of states is known by name rather than by type, for
/// example when durations come from a configuration file.
///
/// ```rust
/// use state_timer::core::{State, StateName};
///
/// const ACTIVE: StateName = StateName::from_static("active");
///
/// assert_eq!(ACTIVE.name(), "active");
/// assert_eq!(ACTIVE, StateName::from("active".to_string()));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(Cow<'static, str>);

impl StateName {
    /// Create a state label from a string literal, usable in constants.
    pub const fn from_static(name: &'static str) -> Self {
        StateName(Cow::Borrowed(name))
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl State for StateName {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for StateName {
    fn from(name: &'static str) -> Self {
        StateName::from_static(name)
    }
}

impl From<String> for StateName {
    fn from(name: String) -> Self {
        StateName(Cow::Owned(name))
    }
}

impl Debug for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Active,
        Idle,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Active => "Active",
                Self::Idle => "Idle",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Active.name(), "Active");
        assert_eq!(TestState::Idle.name(), "Idle");
    }

    #[test]
    fn borrowed_and_owned_labels_are_equal() {
        let borrowed = StateName::from_static("idle");
        let owned = StateName::from(String::from("idle"));

        assert_eq!(borrowed, owned);

        let mut set = HashSet::new();
        set.insert(borrowed);
        assert!(set.contains(&owned));
    }

    #[test]
    fn labels_with_different_text_differ() {
        assert_ne!(StateName::from("active"), StateName::from("Active"));
    }

    #[test]
    fn label_formats_as_plain_text() {
        let state = StateName::from("active");
        assert_eq!(state.to_string(), "active");
        assert_eq!(format!("{state:?}"), "\"active\"");
    }

    #[test]
    fn label_serializes_as_string() {
        let state = StateName::from("active");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"active\"");

        let deserialized: StateName = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
