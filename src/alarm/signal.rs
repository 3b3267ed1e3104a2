//! Receiving end of an alarm's expiration signal.

use chrono::{DateTime, Utc};
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// The moment an alarm fired.
pub type Expiration = DateTime<Utc>;

/// Read-only view of an alarm's expirations.
///
/// At most one expiration is buffered at a time. Receiving it consumes it;
/// a later expiration only arrives after the alarm has been rearmed.
#[derive(Debug)]
pub struct Signal {
    rx: Receiver<Expiration>,
}

impl Signal {
    pub(crate) fn new(rx: Receiver<Expiration>) -> Self {
        Self { rx }
    }

    /// Block until the alarm fires.
    ///
    /// Returns `None` if the alarm clock has shut down, which only happens
    /// while its owner is being dropped.
    pub fn recv(&self) -> Option<Expiration> {
        self.rx.recv().ok()
    }

    /// Block until the alarm fires or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Expiration> {
        match self.rx.recv_timeout(timeout) {
            Ok(fired) => Some(fired),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Take a pending expiration without blocking.
    pub fn try_recv(&self) -> Option<Expiration> {
        match self.rx.try_recv() {
            Ok(fired) => Some(fired),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
