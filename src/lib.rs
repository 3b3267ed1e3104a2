//! State Timer: a countdown timer keyed by state
//!
//! A state timer fires after a period of time that depends on the state the
//! caller says it is in. Each call to `reset` names the current state and
//! restarts the countdown with that state's duration, so a program can wind
//! down after a short quiet period while active and a long one while idle.
//!
//! # Core Concepts
//!
//! - **State**: A label implementing the `State` trait, used only as a map key
//! - **DurationMap**: Immutable mapping from state to countdown duration
//! - **Alarm**: Single-shot alarm that fires once and goes idle until rearmed
//! - **StateTimer**: Alarm that rearms with the duration of each new state
//!
//! # Example
//!
//! ```rust
//! use state_timer::{DurationMap, StateName, StateTimer};
//! use std::time::Duration;
//!
//! const ACTIVE: StateName = StateName::from_static("active");
//! const IDLE: StateName = StateName::from_static("idle");
//!
//! let states = DurationMap::from([
//!     (ACTIVE, Duration::from_millis(5)),
//!     (IDLE, Duration::from_secs(24 * 60 * 60)),
//! ]);
//!
//! // Start out idle.
//! let mut timer = StateTimer::new(IDLE, states);
//!
//! // Work keeps the timer in the active state.
//! timer.reset(ACTIVE);
//! std::thread::sleep(Duration::from_millis(50));
//! timer.reset(ACTIVE);
//!
//! // Wait for the timer to expire, then release it.
//! timer.signal().recv();
//! timer.stop();
//! ```

pub mod alarm;
pub mod builder;
pub mod core;
pub mod error;
mod timer;

// Re-export commonly used types
pub use crate::alarm::{Alarm, Expiration, Signal};
pub use crate::builder::DurationMapBuilder;
pub use crate::core::{DurationMap, State, StateName};
pub use crate::error::{Operation, TimerError};
pub use crate::timer::StateTimer;
