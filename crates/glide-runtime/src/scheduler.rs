#![forbid(unsafe_code)]

//! Single-threaded scheduling of frame tasks and timers.
//!
//! A [`Scheduler`] never runs anything itself. Widgets enqueue message
//! values ("re-render", "settle", "autoplay tick") and the host pumps the
//! scheduler from its own event loop:
//!
//! - [`take_frame`](Scheduler::take_frame) on every animation frame returns
//!   the tasks requested since the previous frame, in request order.
//! - [`advance`](Scheduler::advance) whenever time moves returns every timer
//!   that came due, ordered by due time and then by scheduling order.
//!
//! The returned values are delivered back to the widget, which re-checks its
//! own liveness before acting. This makes cancellation trivial: a destroyed
//! widget simply ignores what it receives, and [`clear`](Scheduler::clear)
//! drops everything still queued.
//!
//! # Invariants
//!
//! 1. A timer never fires before its due time.
//! 2. Timers with equal due times fire in the order they were scheduled.
//! 3. An interval fires at most once per [`advance`](Scheduler::advance)
//!    call. Periods missed during a long gap are skipped, the phase is kept,
//!    and the [`TimerId`] survives re-arms.
//! 4. A cancelled timer never fires.
//!
//! # Example
//!
//! ```
//! use glide_runtime::Scheduler;
//! use std::time::Duration;
//!
//! let mut sched = Scheduler::new();
//! sched.request_frame("render");
//! sched.set_timeout(Duration::from_millis(10), "settle");
//!
//! assert_eq!(sched.take_frame(Duration::from_millis(16)), vec!["render"]);
//! assert_eq!(sched.advance(Duration::from_millis(16)), vec!["settle"]);
//! ```

use std::collections::{BTreeMap, HashMap};

use web_time::Duration;

use crate::clock::{Clock, DeterministicClock};

/// Shortest interval period accepted; zero would never let time advance.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct Timer<T> {
    id: TimerId,
    task: T,
    period: Option<Duration>,
}

/// Frame and timer queue driven by the host.
pub struct Scheduler<T> {
    clock: DeterministicClock,
    frame: Vec<T>,
    timers: BTreeMap<(Duration, u64), Timer<T>>,
    keys: HashMap<TimerId, (Duration, u64)>,
    next_seq: u64,
    next_id: u64,
}

impl<T> std::fmt::Debug for Scheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.clock.now_mono())
            .field("frame_tasks", &self.frame.len())
            .field("timers", &self.timers.len())
            .finish()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: DeterministicClock::new(),
            frame: Vec::new(),
            timers: BTreeMap::new(),
            keys: HashMap::new(),
            next_seq: 0,
            next_id: 0,
        }
    }

    /// Latest time seen from the host.
    #[inline]
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now_mono()
    }

    /// Queue a task for the next animation frame.
    pub fn request_frame(&mut self, task: T) {
        self.frame.push(task);
    }

    /// Whether any task waits for the next frame.
    #[inline]
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        !self.frame.is_empty()
    }

    /// Run a frame at `now`: returns every task requested before it.
    pub fn take_frame(&mut self, now: Duration) -> Vec<T> {
        self.clock.set(now);
        std::mem::take(&mut self.frame)
    }

    /// Fire `task` once, `delay` after the current time.
    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TimerId {
        self.schedule(delay, task, None)
    }

    /// Fire `task` every `period`, starting one period from now.
    pub fn set_interval(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.schedule(period, task, Some(period))
    }

    /// Cancel a timer. Returns `false` if it already fired or was unknown.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => self.timers.remove(&key).is_some(),
            None => false,
        }
    }

    /// Whether `id` is still scheduled.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.keys.contains_key(&id)
    }

    /// Number of scheduled timers.
    #[inline]
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Drop every frame task and timer.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.timers.clear();
        self.keys.clear();
    }

    fn schedule(&mut self, delay: Duration, task: T, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.clock.now_mono().saturating_add(delay);
        self.insert(due, Timer { id, task, period });
        id
    }

    fn insert(&mut self, due: Duration, timer: Timer<T>) {
        let key = (due, self.next_seq);
        self.next_seq += 1;
        self.keys.insert(timer.id, key);
        self.timers.insert(key, timer);
    }
}

impl<T: Clone> Scheduler<T> {
    /// Move time to `now` and return every timer that came due.
    pub fn advance(&mut self, now: Duration) -> Vec<T> {
        self.clock.set(now);
        let now = self.clock.now_mono();
        let mut fired = Vec::new();

        while let Some(entry) = self.timers.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((due, _), timer) = entry.remove_entry();
            self.keys.remove(&timer.id);
            match timer.period {
                Some(period) => {
                    fired.push(timer.task.clone());
                    self.insert(next_due_after(due, period, now), timer);
                }
                None => fired.push(timer.task),
            }
        }

        if !fired.is_empty() {
            tracing::trace!(message = "scheduler.advance", fired = fired.len(), now_ms = now.as_millis() as u64);
        }
        fired
    }
}

/// First `due + k * period` strictly after `now`, for `k >= 1`.
fn next_due_after(due: Duration, period: Duration, now: Duration) -> Duration {
    let period_ns = period.as_nanos().max(1);
    let periods = now.saturating_sub(due).as_nanos() / period_ns + 1;
    let offset = period_ns.saturating_mul(periods);
    let secs = u64::try_from(offset / 1_000_000_000).unwrap_or(u64::MAX);
    let nanos = (offset % 1_000_000_000) as u32;
    due.saturating_add(Duration::new(secs, nanos))
}
