//! Countdown clock
//!
//! A cancellable countdown running on its own background thread. The clock
//! owns one event: "reached zero". Observers are notified exactly once per
//! countdown, after the remaining value reads 0 and before the ticker thread
//! exits.
//!
//! Cancellation discipline: all state transitions happen under one mutex and
//! bump a generation counter. A ticker that wakes to a changed generation
//! performs no further observable mutation, so `start`/`cancel` are
//! synchronous from the caller's perspective even though the old thread tears
//! down asynchronously. At most one ticker thread exists per clock; starting
//! a running clock restarts the countdown in place instead of spawning a
//! second decrement loop.
//!
//! Observer delivery is atomic with the state decision: a `notifying` flag is
//! raised under the state lock before observers run, and `start`, `cancel`,
//! and `force_expire` wait for an in-flight delivery to finish before acting.
//! An expiry that has committed is therefore fully delivered before any
//! control call returns; no notification trails in after a reset. The thread
//! performing delivery skips the wait, so an observer may call back into the
//! clock without deadlocking.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, ThreadId};
use std::time::Duration;

use crate::config::TICK_INTERVAL;

type Observer = Box<dyn Fn() + Send + Sync>;

/// Countdown life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    /// Full duration, not counting
    Idle,
    /// Ticker thread is decrementing
    Running,
    /// Reached zero; observers have been notified
    Expired,
}

struct ClockState {
    remaining: u32,
    phase: ClockPhase,
    generation: u64,
    ticker_alive: bool,
    notifier: Option<ThreadId>,
}

struct Shared {
    state: Mutex<ClockState>,
    wakeup: Condvar,
    observers: Mutex<Vec<Observer>>,
    duration: u32,
    tick: Duration,
}

impl Shared {
    /// Block until no other thread is mid-delivery
    ///
    /// The notifying thread itself passes through, so observers can call back
    /// into the clock.
    fn wait_while_notifying<'a>(
        &self,
        mut state: MutexGuard<'a, ClockState>,
    ) -> MutexGuard<'a, ClockState> {
        let me = thread::current().id();
        while state.notifier.is_some_and(|id| id != me) {
            state = self.wakeup.wait(state).expect("clock state poisoned");
        }
        state
    }

    /// Run every observer, bracketed by the `notifier` marker
    ///
    /// Expects the marker already set under the lock that committed the
    /// expiry, so the state decision and its delivery are indivisible from
    /// the perspective of `start`/`cancel`/`force_expire`.
    fn deliver_expiry(&self) {
        let observers = self.observers.lock().expect("clock observers poisoned");
        for observer in observers.iter() {
            observer();
        }
        drop(observers);

        let mut state = self.state.lock().expect("clock state poisoned");
        state.notifier = None;
        self.wakeup.notify_all();
    }
}

/// A countdown timer with observer notification on expiry
///
/// # Examples
/// ```
/// use twistcore::clock::{Clock, ClockPhase};
///
/// let clock = Clock::new(120);
/// assert_eq!(clock.remaining(), 120);
/// assert_eq!(clock.phase(), ClockPhase::Idle);
///
/// clock.force_expire();
/// assert_eq!(clock.remaining(), 0);
/// assert_eq!(clock.phase(), ClockPhase::Expired);
/// ```
pub struct Clock {
    shared: Arc<Shared>,
}

impl Clock {
    /// Create an idle clock with the given duration in seconds
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self::with_tick(duration_secs, TICK_INTERVAL)
    }

    /// Create an idle clock with a custom tick interval
    ///
    /// One second is the gameplay interval; shorter ticks keep tests fast.
    #[must_use]
    pub fn with_tick(duration_secs: u32, tick: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ClockState {
                    remaining: duration_secs,
                    phase: ClockPhase::Idle,
                    generation: 0,
                    ticker_alive: false,
                    notifier: None,
                }),
                wakeup: Condvar::new(),
                observers: Mutex::new(Vec::new()),
                duration: duration_secs,
                tick,
            }),
        }
    }

    /// Seconds left on the countdown
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.shared.state.lock().expect("clock state poisoned").remaining
    }

    /// Current life-cycle phase
    #[must_use]
    pub fn phase(&self) -> ClockPhase {
        self.shared.state.lock().expect("clock state poisoned").phase
    }

    /// Whether a countdown is in progress
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase() == ClockPhase::Running
    }

    /// Register a callback for the "reached zero" event
    ///
    /// A callback registered once is invoked once per countdown.
    pub fn add_observer<F>(&self, observer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.shared
            .observers
            .lock()
            .expect("clock observers poisoned")
            .push(Box::new(observer));
    }

    /// Start (or restart) the countdown at full duration
    ///
    /// If a ticker thread is already alive the countdown restarts in place;
    /// no second decrement loop is spawned.
    pub fn start(&self) {
        let state = self.shared.state.lock().expect("clock state poisoned");
        let mut state = self.shared.wait_while_notifying(state);

        if self.shared.duration == 0 {
            // Degenerate configuration: expire immediately
            state.generation += 1;
            state.remaining = 0;
            state.phase = ClockPhase::Expired;
            state.notifier = Some(thread::current().id());
            self.shared.wakeup.notify_all();
            drop(state);
            self.shared.deliver_expiry();
            return;
        }

        state.generation += 1;
        state.remaining = self.shared.duration;
        state.phase = ClockPhase::Running;

        if state.ticker_alive {
            // Existing ticker adopts the new countdown
            self.shared.wakeup.notify_all();
            return;
        }

        state.ticker_alive = true;
        drop(state);

        let shared = Arc::clone(&self.shared);
        thread::spawn(move || run_ticker(&shared));
    }

    /// Stop the countdown without firing the expiry notification
    ///
    /// Back to `Idle` at full duration. Synchronous: once this returns, the
    /// old countdown can make no further observable mutation. An expiry whose
    /// delivery is already in flight completes before the reset takes effect.
    pub(crate) fn cancel(&self) {
        let state = self.shared.state.lock().expect("clock state poisoned");
        let mut state = self.shared.wait_while_notifying(state);
        state.generation += 1;
        state.remaining = self.shared.duration;
        state.phase = ClockPhase::Idle;
        self.shared.wakeup.notify_all();
    }

    /// Jump the countdown to zero and notify observers
    ///
    /// Used when the puzzle is fully solved before time runs out, so
    /// downstream logic that reacts to expiry runs uniformly. A no-op when
    /// already expired, preserving the exactly-once notification guarantee.
    pub fn force_expire(&self) {
        let state = self.shared.state.lock().expect("clock state poisoned");
        let mut state = self.shared.wait_while_notifying(state);
        if state.phase == ClockPhase::Expired {
            return;
        }
        state.generation += 1;
        state.remaining = 0;
        state.phase = ClockPhase::Expired;
        state.notifier = Some(thread::current().id());
        self.shared.wakeup.notify_all();
        drop(state);

        self.shared.deliver_expiry();
    }
}

fn run_ticker(shared: &Shared) {
    let mut state = shared.state.lock().expect("clock state poisoned");
    loop {
        if state.phase != ClockPhase::Running {
            // Cancelled or expired from outside; retire the thread
            state.ticker_alive = false;
            return;
        }

        let generation = state.generation;
        let (guard, timeout) = shared
            .wakeup
            .wait_timeout(state, shared.tick)
            .expect("clock state poisoned");
        state = guard;

        if state.generation != generation {
            // Countdown restarted or cancelled while we slept
            continue;
        }
        if !timeout.timed_out() {
            // Spurious wakeup; same countdown, tick not yet elapsed
            continue;
        }

        state.remaining = state.remaining.saturating_sub(1);
        if state.remaining == 0 {
            state.phase = ClockPhase::Expired;
            state.ticker_alive = false;
            state.notifier = Some(thread::current().id());
            drop(state);
            shared.deliver_expiry();
            return;
        }
    }
}
