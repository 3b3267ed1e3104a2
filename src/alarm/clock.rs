//! Background clock that delivers an alarm's expiration.

use super::signal::Expiration;
use chrono::Utc;
use parking_lot::{Condvar, Mutex};
use std::sync::mpsc::{SyncSender, TrySendError};
use std::sync::Arc;
use std::time::Instant;
use tracing::trace;

/// Countdown state shared between an alarm handle and its clock thread.
#[derive(Debug, Default)]
pub(crate) struct Countdown {
    /// When the alarm fires. `None` once fired or cancelled.
    pub(crate) deadline: Option<Instant>,
    /// Set when the owning alarm is dropped.
    pub(crate) closed: bool,
}

#[derive(Debug, Default)]
pub(crate) struct Shared {
    pub(crate) countdown: Mutex<Countdown>,
    pub(crate) wake: Condvar,
}

/// Clock thread body.
///
/// The expiration is sent while the countdown lock is held. Whoever takes
/// the lock next therefore sees either a pending deadline or a signal that
/// is already buffered, never something in between.
pub(crate) fn run(shared: Arc<Shared>, tx: SyncSender<Expiration>) {
    let mut countdown = shared.countdown.lock();
    loop {
        if countdown.closed {
            break;
        }

        let Some(deadline) = countdown.deadline else {
            shared.wake.wait(&mut countdown);
            continue;
        };

        if Instant::now() < deadline {
            // Rearms and cancellations notify, so the deadline is re-read
            // after every wakeup.
            shared.wake.wait_until(&mut countdown, deadline);
            continue;
        }

        countdown.deadline = None;
        match tx.try_send(Utc::now()) {
            Ok(()) => trace!("alarm fired"),
            Err(TrySendError::Full(_)) => trace!("alarm fired with expiration still pending"),
            Err(TrySendError::Disconnected(_)) => break,
        }
    }
    trace!("alarm clock stopped");
}
