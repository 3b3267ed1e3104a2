//! Core timer types.
//!
//! This module contains the plain data the timer is configured with:
//! - State labels via the `State` trait and the string-backed `StateName`
//! - The immutable `DurationMap` from state to countdown duration

mod durations;
mod state;

pub use durations::DurationMap;
pub use state::{State, StateName};
