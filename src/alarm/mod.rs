//! Single-shot alarm.
//!
//! An [`Alarm`] fires once after a duration, buffers one [`Expiration`] on
//! its [`Signal`], and then stays idle until it is rearmed with
//! [`Alarm::reset`]. A dedicated clock thread does the waiting, so arming,
//! rearming and stopping never block the caller.

mod clock;
mod signal;

pub use signal::{Expiration, Signal};

use clock::Shared;
use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Stand-in deadline for durations too large to add to the current instant.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn deadline_after(duration: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(duration)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

/// A timer that fires once after a duration and then goes idle.
///
/// `stop` and `reset` take `&mut self` while the signal is only reachable
/// through `&self`, so nothing can be waiting on the signal while the alarm
/// is being stopped or rearmed.
///
/// # Example
///
/// ```rust
/// use state_timer::alarm::Alarm;
/// use std::time::Duration;
///
/// let mut alarm = Alarm::new(Duration::from_millis(1)).unwrap();
/// assert!(alarm.signal().recv().is_some());
///
/// // Already fired, so there was nothing to cancel.
/// assert!(!alarm.stop());
/// ```
#[derive(Debug)]
pub struct Alarm {
    shared: Arc<Shared>,
    signal: Signal,
    clock: Option<JoinHandle<()>>,
}

impl Alarm {
    /// Create an alarm that fires once after `duration`, starting now.
    ///
    /// Fails only if the clock thread cannot be spawned.
    pub fn new(duration: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::sync_channel(1);
        let shared = Arc::new(Shared::default());
        shared.countdown.lock().deadline = Some(deadline_after(duration));

        let clock = thread::Builder::new()
            .name("state-timer-alarm".to_string())
            .spawn({
                let shared = Arc::clone(&shared);
                move || clock::run(shared, tx)
            })?;

        Ok(Self {
            shared,
            signal: Signal::new(rx),
            clock: Some(clock),
        })
    }

    /// The alarm's expiration signal.
    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    /// When the alarm will fire, or `None` if it has fired or been stopped.
    pub fn deadline(&self) -> Option<Instant> {
        self.shared.countdown.lock().deadline
    }

    /// Cancel the countdown.
    ///
    /// Returns `true` if the alarm was still pending. `false` means it had
    /// already fired (or was stopped before) and an expiration may be
    /// waiting on the signal.
    pub fn stop(&mut self) -> bool {
        let mut countdown = self.shared.countdown.lock();
        let was_pending = countdown.deadline.take().is_some();
        if was_pending {
            self.shared.wake.notify_one();
        }
        was_pending
    }

    /// Restart the countdown so the alarm fires `duration` from now.
    ///
    /// Returns `true` if the alarm was still pending. An expiration that is
    /// already buffered is left on the signal.
    pub fn reset(&mut self, duration: Duration) -> bool {
        let mut countdown = self.shared.countdown.lock();
        let was_pending = countdown.deadline.is_some();
        countdown.deadline = Some(deadline_after(duration));
        self.shared.wake.notify_one();
        was_pending
    }
}

impl Drop for Alarm {
    fn drop(&mut self) {
        {
            let mut countdown = self.shared.countdown.lock();
            countdown.deadline = None;
            countdown.closed = true;
            self.shared.wake.notify_one();
        }
        if let Some(clock) = self.clock.take() {
            let _ = clock.join();
        }
    }
}
