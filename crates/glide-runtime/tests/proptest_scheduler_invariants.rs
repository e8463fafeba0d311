//! Property-based invariant tests for the scheduler.
//!
//! 1. Timers never fire early and fire exactly once
//! 2. Fired timers come out in due-time order
//! 3. Cancelled timers never fire
//! 4. An interval fires at most once per advance, never early, on its phase

use glide_runtime::Scheduler;
use proptest::prelude::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

proptest! {
    #[test]
    fn timeouts_fire_once_in_order(
        delays in prop::collection::vec(0u64..500, 1..40),
        steps in prop::collection::vec(1u64..80, 1..40),
    ) {
        let mut sched = Scheduler::new();
        for (i, d) in delays.iter().enumerate() {
            sched.set_timeout(ms(*d), (i, *d));
        }

        let mut now = 0u64;
        let mut seen = Vec::new();
        for step in steps {
            now += step;
            for (i, due) in sched.advance(ms(now)) {
                prop_assert!(due <= now, "timer {} due {} fired at {}", i, due, now);
                seen.push((i, due));
            }
        }
        seen.extend(sched.advance(ms(10_000)));

        prop_assert_eq!(seen.len(), delays.len());
        for pair in seen.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].1);
            if pair[0].1 == pair[1].1 {
                prop_assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    #[test]
    fn cancelled_never_fire(
        delays in prop::collection::vec(1u64..300, 1..30),
        cancel_mask in prop::collection::vec(any::<bool>(), 30),
    ) {
        let mut sched = Scheduler::new();
        let mut expected = 0usize;
        for (i, d) in delays.iter().enumerate() {
            let id = sched.set_timeout(ms(*d), i);
            if cancel_mask[i] {
                prop_assert!(sched.cancel(id));
            } else {
                expected += 1;
            }
        }
        let fired = sched.advance(ms(1_000));
        prop_assert_eq!(fired.len(), expected);
        for i in fired {
            prop_assert!(!cancel_mask[i]);
        }
    }

    #[test]
    fn interval_fires_at_most_once_per_advance(
        period in 1u64..500,
        steps in prop::collection::vec(1u64..5_000, 1..40),
    ) {
        let mut sched = Scheduler::new();
        sched.set_interval(ms(period), ());
        let mut now = 0u64;
        let mut next_due = period;
        for step in steps {
            now += step;
            let fired = sched.advance(ms(now)).len();
            if now >= next_due {
                prop_assert_eq!(fired, 1);
                next_due += period * ((now - next_due) / period + 1);
            } else {
                prop_assert_eq!(fired, 0);
            }
        }
    }
}
