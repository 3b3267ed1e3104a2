//! Countdown timer whose duration follows the caller's state.

use crate::alarm::{Alarm, Signal};
use crate::core::{DurationMap, State};
use crate::error::{Operation, TimerError};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// A timer that fires when the caller stays in a state for that state's
/// configured duration.
///
/// Every [`reset`](Self::reset) restarts the countdown with the duration of
/// the given state, even when the state is unchanged. If no reset arrives in
/// time an expiration is delivered on [`signal`](Self::signal).
///
/// # Unknown states
///
/// [`new`](Self::new) and [`reset`](Self::reset) panic when asked to adopt a
/// state that has no duration. The set of states is expected to be fixed and
/// known up front, so an unknown state is a programming error. Callers that
/// prefer an error value can use [`try_new`](Self::try_new) and
/// [`try_reset`](Self::try_reset), or check the map once at startup with
/// [`DurationMap::ensure_covers`].
///
/// # Stopping and concurrency
///
/// Always call [`stop`](Self::stop) when finished with the countdown. It
/// cancels a pending expiration or discards one that was delivered but not
/// received, so a stale expiration never reaches a later listener.
///
/// There is no internal lock between stopping or rearming the timer and
/// receiving from its signal. Both `stop` and `reset` take `&mut self` and
/// the signal is borrowed from `&self`, so the borrow checker rejects any
/// attempt to stop or rearm while the signal is being received from.
/// Sharing a timer between threads requires wrapping it, e.g. in a `Mutex`,
/// which serializes the two sides.
///
/// # Example
///
/// ```rust
/// use state_timer::{state_enum, DurationMap, StateTimer};
/// use std::time::Duration;
///
/// state_enum! {
///     enum Activity {
///         Active,
///         Idle,
///     }
/// }
///
/// let states = DurationMap::from([
///     (Activity::Active, Duration::from_millis(5)),
///     (Activity::Idle, Duration::from_secs(24 * 60 * 60)),
/// ]);
///
/// let mut timer = StateTimer::new(Activity::Idle, states);
///
/// timer.reset(Activity::Active);
/// std::thread::sleep(Duration::from_millis(50));
/// timer.reset(Activity::Active);
///
/// assert!(timer.signal().recv().is_some());
/// timer.stop();
/// ```
#[derive(Debug)]
pub struct StateTimer<S: State> {
    alarm: Alarm,
    states: DurationMap<S>,
    current: S,
}

impl<S: State> StateTimer<S> {
    /// Create a timer in `initial` and start its countdown immediately.
    ///
    /// # Panics
    ///
    /// Panics if `initial` has no duration in `states`.
    pub fn new(initial: S, states: impl Into<DurationMap<S>>) -> Self {
        match Self::try_new(initial, states) {
            Ok(timer) => timer,
            Err(err) => {
                error!(error = %err, "state timer could not be created");
                panic!("{err}");
            }
        }
    }

    /// Create a timer in `initial`, returning an error instead of panicking.
    pub fn try_new(initial: S, states: impl Into<DurationMap<S>>) -> Result<Self, TimerError> {
        let states = states.into();
        let duration = lookup(&states, &initial, Operation::Construct)?;
        let alarm = Alarm::new(duration)?;

        debug!(state = initial.name(), ?duration, "state timer armed");

        Ok(Self {
            alarm,
            states,
            current: initial,
        })
    }

    /// Restart the countdown with the duration configured for `state`.
    ///
    /// A pending or already delivered expiration from the previous countdown
    /// is discarded first.
    ///
    /// # Panics
    ///
    /// Panics if `state` has no duration. The timer is left as it was.
    pub fn reset(&mut self, state: S) {
        if let Err(err) = self.try_reset(state) {
            error!(error = %err, "state timer could not be reset");
            panic!("{err}");
        }
    }

    /// Restart the countdown for `state`, returning an error instead of
    /// panicking when the state is unknown.
    pub fn try_reset(&mut self, state: S) -> Result<(), TimerError> {
        let duration = lookup(&self.states, &state, Operation::Reset)?;

        self.quiesce();
        self.alarm.reset(duration);

        debug!(
            from = self.current.name(),
            to = state.name(),
            ?duration,
            "state timer rearmed"
        );
        self.current = state;
        Ok(())
    }

    /// Stop the countdown.
    ///
    /// Never blocks. After `stop` no expiration arrives until the next
    /// [`reset`](Self::reset).
    pub fn stop(&mut self) {
        let drained = self.quiesce();
        debug!(state = self.current.name(), drained, "state timer stopped");
    }

    /// Cancel the alarm, draining an expiration it already delivered.
    /// Returns whether an expiration was drained.
    fn quiesce(&mut self) -> bool {
        if self.alarm.stop() {
            return false;
        }
        self.alarm.signal().try_recv().is_some()
    }

    /// Expirations of this timer.
    pub fn signal(&self) -> &Signal {
        self.alarm.signal()
    }

    /// The state most recently adopted through `new` or `reset`.
    pub fn state(&self) -> &S {
        &self.current
    }

    /// The durations this timer was created with.
    pub fn durations(&self) -> &DurationMap<S> {
        &self.states
    }

    /// When the timer will fire, or `None` once it has fired or been stopped.
    pub fn deadline(&self) -> Option<Instant> {
        self.alarm.deadline()
    }

    /// Whether the countdown is still running.
    pub fn is_pending(&self) -> bool {
        self.deadline().is_some()
    }
}

fn lookup<S: State>(
    states: &DurationMap<S>,
    state: &S,
    operation: Operation,
) -> Result<Duration, TimerError> {
    states.get(state).ok_or_else(|| TimerError::UnknownState {
        state: state.name().to_string(),
        operation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;
    use std::thread;

    state_enum! {
        enum TestState {
            Active,
            Idle,
            Unmapped,
        }
    }

    fn states(active: Duration, idle: Duration) -> DurationMap<TestState> {
        DurationMap::from([(TestState::Active, active), (TestState::Idle, idle)])
    }

    #[test]
    fn new_arms_with_initial_duration() {
        let timer = StateTimer::new(
            TestState::Idle,
            states(Duration::from_millis(5), Duration::from_secs(3600)),
        );

        assert_eq!(timer.state(), &TestState::Idle);
        assert!(timer.is_pending());
        let remaining = timer.deadline().unwrap() - Instant::now();
        assert!(remaining > Duration::from_secs(3500));
    }

    #[test]
    #[should_panic(expected = "state timer created with unknown state \"Unmapped\"")]
    fn new_panics_on_unknown_state() {
        let _timer = StateTimer::new(
            TestState::Unmapped,
            states(Duration::from_millis(5), Duration::from_secs(1)),
        );
    }

    #[test]
    #[should_panic(expected = "state timer reset with unknown state \"Unmapped\"")]
    fn reset_panics_on_unknown_state() {
        let mut timer = StateTimer::new(
            TestState::Idle,
            states(Duration::from_millis(5), Duration::from_secs(1)),
        );
        timer.reset(TestState::Unmapped);
    }

    #[test]
    fn try_new_reports_unknown_state() {
        let result = StateTimer::try_new(
            TestState::Unmapped,
            states(Duration::from_millis(5), Duration::from_secs(1)),
        );

        assert!(matches!(
            result,
            Err(TimerError::UnknownState { ref state, operation: Operation::Construct })
                if state == "Unmapped"
        ));
    }

    #[test]
    fn failed_try_reset_leaves_timer_untouched() {
        let mut timer = StateTimer::new(
            TestState::Idle,
            states(Duration::from_millis(5), Duration::from_secs(3600)),
        );
        let deadline = timer.deadline();

        let result = timer.try_reset(TestState::Unmapped);

        assert!(matches!(
            result,
            Err(TimerError::UnknownState { operation: Operation::Reset, .. })
        ));
        assert_eq!(timer.state(), &TestState::Idle);
        assert_eq!(timer.deadline(), deadline);
    }

    #[test]
    fn reset_switches_to_new_state_duration() {
        let mut timer = StateTimer::new(
            TestState::Idle,
            states(Duration::from_millis(5), Duration::from_secs(3600)),
        );

        let reset_at = Instant::now();
        timer.reset(TestState::Active);

        assert_eq!(timer.state(), &TestState::Active);
        assert!(timer
            .signal()
            .recv_timeout(Duration::from_secs(5))
            .is_some());
        assert!(reset_at.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn reset_to_same_state_restarts_countdown() {
        let mut timer = StateTimer::new(
            TestState::Idle,
            states(Duration::from_millis(5), Duration::from_secs(3600)),
        );
        let first = timer.deadline().unwrap();

        thread::sleep(Duration::from_millis(5));
        timer.reset(TestState::Idle);

        assert!(timer.deadline().unwrap() > first);
    }

    #[test]
    fn reset_discards_undelivered_expiration() {
        let mut timer = StateTimer::new(
            TestState::Active,
            states(Duration::from_millis(1), Duration::from_secs(3600)),
        );
        thread::sleep(Duration::from_millis(20));

        timer.reset(TestState::Idle);

        assert!(timer.signal().try_recv().is_none());
        assert!(timer.is_pending());
    }

    #[test]
    fn stop_cancels_pending_countdown() {
        let mut timer = StateTimer::new(
            TestState::Idle,
            states(Duration::from_millis(5), Duration::from_secs(3600)),
        );

        timer.stop();

        assert!(!timer.is_pending());
        assert!(timer.signal().try_recv().is_none());
    }

    #[test]
    fn stop_twice_is_harmless() {
        let mut timer = StateTimer::new(
            TestState::Active,
            states(Duration::from_millis(1), Duration::from_secs(3600)),
        );
        thread::sleep(Duration::from_millis(20));

        timer.stop();
        timer.stop();

        assert!(timer.signal().try_recv().is_none());
    }

    #[test]
    fn durations_are_kept() {
        let map = states(Duration::from_millis(5), Duration::from_secs(3600));
        let timer = StateTimer::new(TestState::Idle, map.clone());

        assert_eq!(
            timer.durations().get(&TestState::Active),
            Some(Duration::from_millis(5))
        );
        assert_eq!(timer.durations().len(), map.len());
    }
}
